//! Board module - manages the 3x3 game grid
//!
//! Cells are stored in a flat row-major array (`row * 3 + col`).
//! A cell is written at most once between resets: `apply_move` refuses to
//! overwrite an occupied cell and leaves the board untouched when it does.

use crate::error::IllegalMove;
use crate::types::{Cell, Player, CELL_COUNT, GRID_SIZE};

/// The game board - 3x3 cells using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Calculate flat index from (row, col)
    /// Returns None if out of bounds
    #[inline(always)]
    pub fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Get cell at index
    /// Returns None if out of bounds
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Check if index is within bounds and empty (a legal target)
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Place `player`'s mark at `index`.
    ///
    /// Fails without touching the board if the cell is occupied or out of range.
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<(), IllegalMove> {
        match self.cells.get_mut(index) {
            None => Err(IllegalMove::OutOfBounds { index }),
            Some(Cell::Occupied(_)) => Err(IllegalMove::Occupied { index }),
            Some(cell) => {
                *cell = Cell::Occupied(player);
                Ok(())
            }
        }
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Clear all cells.
    ///
    /// Whether a reset is allowed right now is decided by the caller.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }
}
