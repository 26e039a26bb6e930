use tracing::trace;

use crate::core::{CursorPosition, GameState};
use crate::types::GameAction;

/// A running session: the game and where the cursor is.
#[derive(Debug, Clone)]
pub struct Session {
    game: GameState,
    cursor: CursorPosition,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        Self::with_game(GameState::new(seed))
    }

    pub fn with_game(game: GameState) -> Self {
        Self {
            game,
            cursor: CursorPosition::default(),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    /// Apply one action.
    ///
    /// Cursor moves are always honoured and never touch the game. Confirm
    /// targets the cell under the cursor. Reset is forwarded and the game
    /// decides whether it applies. Returns true if anything changed.
    pub fn dispatch(&mut self, action: GameAction) -> bool {
        trace!(action = action.as_str(), "dispatch");
        match action {
            GameAction::Move(dir) => {
                let next = self.cursor.moved(dir);
                let changed = next != self.cursor;
                self.cursor = next;
                changed
            }
            GameAction::Confirm => self.game.confirm(self.cursor.index()),
            GameAction::Reset => self.game.reset(),
        }
    }
}
