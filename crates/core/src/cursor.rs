//! Selection cursor - the human's pointer into the grid.
//!
//! The cursor is a UI affordance only; moving it never touches the board.

use crate::types::{Direction, CELL_ANCHORS, GRID_SIZE};

/// Selected (row, col), both in `0..3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CursorPosition {
    row: u8,
    col: u8,
}

impl CursorPosition {
    /// Create a cursor, clamping out-of-range coordinates onto the grid
    pub fn new(row: u8, col: u8) -> Self {
        let max = (GRID_SIZE - 1) as u8;
        Self {
            row: row.min(max),
            col: col.min(max),
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Flat board index of the selected cell
    pub fn index(&self) -> usize {
        self.row as usize * GRID_SIZE + self.col as usize
    }

    /// Window-relative (x, y) where the selected cell's glyph is drawn
    pub fn anchor(&self) -> (u16, u16) {
        CELL_ANCHORS[self.index()]
    }

    /// Move one cell in `dir`; edges clamp (no wraparound)
    pub fn moved(self, dir: Direction) -> Self {
        let max = (GRID_SIZE - 1) as u8;
        match dir {
            Direction::Up => Self {
                row: self.row.saturating_sub(1),
                ..self
            },
            Direction::Down => Self {
                row: (self.row + 1).min(max),
                ..self
            },
            Direction::Left => Self {
                col: self.col.saturating_sub(1),
                ..self
            },
            Direction::Right => Self {
                col: (self.col + 1).min(max),
                ..self
            },
        }
    }
}
