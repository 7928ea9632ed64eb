//! Keyboard input via crossterm

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::command::Command;
use crate::core::error::Result;
use crate::simulation::session::InputSource;

/// Key press → command, `None` for keys with no meaning
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char(symbol) => Command::from_symbol(symbol),
        KeyCode::Esc => Some(Command::ExitGrid),
        _ => None,
    }
}

/// Polls the terminal for at most one key per tick without waiting
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> Result<Option<Command>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(command_for_key(key)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(command_for_key(press(KeyCode::Char('a'))), Some(Command::LookLeft));
        assert_eq!(command_for_key(press(KeyCode::Char('W'))), Some(Command::OpenGrid));
        assert_eq!(command_for_key(press(KeyCode::Char('-'))), Some(Command::SelectCamera('-')));
    }

    #[test]
    fn test_escape_exits_grid() {
        assert_eq!(command_for_key(press(KeyCode::Esc)), Some(Command::ExitGrid));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for_key(key), Some(Command::Quit));
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for_key(key), None);
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(command_for_key(press(KeyCode::Char('z'))), None);
        assert_eq!(command_for_key(press(KeyCode::Enter)), None);
    }
}
