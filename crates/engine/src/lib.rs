//! Session engine: one game plus the human's cursor.
//!
//! This is the dispatch table of the event loop, kept free of terminal I/O so
//! it can be driven directly from tests.

pub mod session;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use session::Session;
