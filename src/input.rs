//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Fire,
    /// Esc: back to the intro, or exit from the intro itself.
    Cancel,
    /// Ctrl-C: exit from anywhere.
    Quit,
    Confirm,
}

/// Map a key press to a command. Unbound keys yield `None`.
pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char('a') | KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Char('w') | KeyCode::Char(' ') => Some(Command::Fire),
        KeyCode::Esc => Some(Command::Cancel),
        KeyCode::Enter => Some(Command::Confirm),
        _ => None,
    }
}
