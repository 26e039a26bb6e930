//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management.
//! It has **no dependencies** on the terminal, making it:
//!
//! - **Deterministic**: Same seed produces identical computer moves
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Can run headless
//!
//! # Module Structure
//!
//! - [`board`]: 3x3 grid with move legality
//! - [`rules`]: win detection over rows, columns, and diagonals
//! - [`game_state`]: turn controller (human move, computer reply, game over, reset)
//! - [`cursor`]: the human's selection cursor
//! - [`rng`]: seeded LCG and the random computer move generator
//! - [`error`]: [`IllegalMove`]
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::GameState;
//! use tui_tictactoe_types::Turn;
//!
//! let mut game = GameState::new(12345);
//!
//! // The first confirm lets the computer open.
//! game.confirm(0);
//! assert_eq!(game.turn(), Turn::Human);
//!
//! // Pick any empty cell; the computer answers immediately.
//! let idx = (0..9).find(|&i| game.board().is_empty_at(i)).unwrap();
//! assert!(game.confirm(idx));
//! assert_eq!(game.board().empty_count(), 6);
//! ```

pub mod board;
pub mod cursor;
pub mod error;
pub mod game_state;
pub mod rng;
pub mod rules;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use cursor::CursorPosition;
pub use error::IllegalMove;
pub use game_state::GameState;
pub use rng::{pick_empty_cell, SimpleRng};
pub use rules::{evaluate, winning_line};
