//! Key mapping from terminal events to game actions.
//!
//! Bindings are case-sensitive: lowercase `s` moves the cursor down while
//! uppercase `S` restarts a finished game.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor
        KeyCode::Up | KeyCode::Char('w') => Some(GameAction::Move(Direction::Up)),
        KeyCode::Left | KeyCode::Char('a') => Some(GameAction::Move(Direction::Left)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameAction::Move(Direction::Down)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameAction::Move(Direction::Right)),

        // Actions
        KeyCode::Enter => Some(GameAction::Confirm),
        KeyCode::Char('S') => Some(GameAction::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('Q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
