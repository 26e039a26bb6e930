//! Win detection over the 8 lines of the board.

use crate::board::Board;
use crate::types::{Cell, Player, LINES};

/// Return the player holding a completed line, if any.
///
/// Lines are scanned rows, then columns, then diagonals; the first completed
/// one wins. Empty cells never form a line.
pub fn evaluate(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

/// Like [`evaluate`], but also returns the cell indices of the completed line.
pub fn winning_line(board: &Board) -> Option<(Player, [usize; 3])> {
    let cells = board.cells();
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match cells[a] {
            Cell::Occupied(player) if cells[b] == cells[a] && cells[c] == cells[a] => {
                Some((player, line))
            }
            _ => None,
        }
    })
}
