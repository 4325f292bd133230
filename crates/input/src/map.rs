//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to a game command.
///
/// Auto-repeat events are accepted for movement and soft drop so that holding
/// a key keeps the piece moving; every other command fires on press only.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    let command = match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Command::MoveLeft,
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Command::MoveRight,
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Command::SoftDrop,

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Command::Rotate,

        // Actions
        KeyCode::Char(' ') => Command::HardDrop,
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Command::TogglePause,
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Command::Start,

        _ => return None,
    };

    match key.kind {
        KeyEventKind::Press => Some(command),
        KeyEventKind::Repeat if is_repeatable(command) => Some(command),
        _ => None,
    }
}

fn is_repeatable(command: Command) -> bool {
    matches!(
        command,
        Command::MoveLeft | Command::MoveRight | Command::SoftDrop
    )
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && (matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)))
}
