//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is flushed to the terminal as a diff.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep `GameView` pure so frames can be asserted on in tests
//! - Never mutate game state from the rendering side

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, restore_terminal, TerminalRenderer};
