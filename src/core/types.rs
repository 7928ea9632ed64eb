//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Simulated seconds since the shift started
pub type Seconds = f64;

/// Where the player is currently looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum View {
    #[default]
    Center,
    Left,
    Right,
    CameraGrid,
}

impl View {
    /// The door/light side this view faces, if any
    pub fn side(&self) -> Option<Side> {
        match self {
            View::Left => Some(Side::Left),
            View::Right => Some(Side::Right),
            View::Center | View::CameraGrid => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Center => "CENTER",
            View::Left => "LEFT",
            View::Right => "RIGHT",
            View::CameraGrid => "CAMERA",
        }
    }
}

/// One of the two access points of the office
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn name(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// How a shift ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Reached the terminal hour
    Survived,
    /// Power hit zero
    PowerFailed,
    /// Player left
    Quit,
}

impl Outcome {
    pub fn banner(&self) -> &'static str {
        match self {
            Outcome::Survived => "Congratulations! You survived the night!",
            Outcome::PowerFailed => "The power is out.",
            Outcome::Quit => "Shift abandoned.",
        }
    }
}

/// Lifecycle of a shift: running until one of the terminal outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    Running,
    Won,
    PowerFailed,
    Quit,
}

impl ShiftStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ShiftStatus::Running)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            ShiftStatus::Running => None,
            ShiftStatus::Won => Some(Outcome::Survived),
            ShiftStatus::PowerFailed => Some(Outcome::PowerFailed),
            ShiftStatus::Quit => Some(Outcome::Quit),
        }
    }
}

impl From<Outcome> for ShiftStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Survived => ShiftStatus::Won,
            Outcome::PowerFailed => ShiftStatus::PowerFailed,
            Outcome::Quit => ShiftStatus::Quit,
        }
    }
}
