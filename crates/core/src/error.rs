//! Error types for board mutation

use thiserror::Error;

/// A move the board refused to apply
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("illegal move: cell {index} is already occupied")]
    Occupied { index: usize },

    #[error("illegal move: cell {index} is outside the 3x3 board")]
    OutOfBounds { index: usize },
}
