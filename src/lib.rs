//! TUI Tic-Tac-Toe (workspace facade crate).
//!
//! This package exposes `tui_tictactoe::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_engine as engine;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;
