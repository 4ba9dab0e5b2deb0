use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shell_invaders::input::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn movement_keys() {
    assert_eq!(command_for(&key(KeyCode::Char('a'))), Some(Command::MoveLeft));
    assert_eq!(command_for(&key(KeyCode::Left)), Some(Command::MoveLeft));
    assert_eq!(command_for(&key(KeyCode::Char('d'))), Some(Command::MoveRight));
    assert_eq!(command_for(&key(KeyCode::Right)), Some(Command::MoveRight));
}

#[test]
fn fire_keys() {
    assert_eq!(command_for(&key(KeyCode::Char('w'))), Some(Command::Fire));
    assert_eq!(command_for(&key(KeyCode::Char(' '))), Some(Command::Fire));
}

#[test]
fn menu_keys() {
    assert_eq!(command_for(&key(KeyCode::Esc)), Some(Command::Cancel));
    assert_eq!(command_for(&key(KeyCode::Enter)), Some(Command::Confirm));
}

#[test]
fn ctrl_c_quits() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(command_for(&ctrl_c), Some(Command::Quit));
    assert_eq!(command_for(&key(KeyCode::Char('c'))), None);
}

#[test]
fn unbound_keys_ignored() {
    assert_eq!(command_for(&key(KeyCode::Char('A'))), None);
    assert_eq!(command_for(&key(KeyCode::Char('q'))), None);
    assert_eq!(command_for(&key(KeyCode::Up)), None);
    let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
    assert_eq!(command_for(&ctrl_a), None);
}
