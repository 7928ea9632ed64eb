//! Player commands
//!
//! A command is one discrete symbol from the fixed input vocabulary. The
//! processor turns a command plus the current facility state into state
//! changes and ambient events.

pub mod processor;

pub use processor::{CommandProcessor, Dispatch, GridExitPolicy};

use serde::{Deserialize, Serialize};

use crate::simulation::cameras;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    LookLeft,
    LookRight,
    ToggleDoor,
    ToggleLight,
    OpenGrid,
    ExitGrid,
    ReturnCenter,
    /// Camera key as pressed; the camera directory maps it to a slot
    SelectCamera(char),
    Quit,
}

impl Command {
    /// Keyboard symbol → command; letters are case-insensitive
    pub fn from_symbol(symbol: char) -> Option<Self> {
        if cameras::is_camera_key(symbol) {
            return Some(Command::SelectCamera(symbol));
        }

        match symbol.to_ascii_lowercase() {
            'a' => Some(Command::LookLeft),
            'd' => Some(Command::LookRight),
            'e' => Some(Command::ToggleDoor),
            'r' => Some(Command::ToggleLight),
            'w' => Some(Command::OpenGrid),
            'x' => Some(Command::ExitGrid),
            's' => Some(Command::ReturnCenter),
            'q' => Some(Command::Quit),
            _ => None,
        }
    }
}
