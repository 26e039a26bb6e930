//! Game state module - the turn controller
//!
//! Owns the board, whose turn it is, the winner, and the computer's RNG.
//! All transitions happen here:
//!
//! | Turn | Event | Result |
//! |------|-------|--------|
//! | Computer | confirm (before the first game) | computer opens, then Human |
//! | Human | confirm on an occupied cell | ignored |
//! | Human | confirm on an empty cell | Human marks it; win → GameOver, else the computer replies inline |
//! | (computer reply) | board full | GameOver, draw |
//! | (computer reply) | otherwise | Computer marks a random empty cell; win → GameOver, board full → GameOver (draw), else Human |
//! | GameOver | reset | board and winner cleared, Human |
//!
//! Reset in any other turn is a no-op.

use tracing::{debug, info};

use crate::board::Board;
use crate::rng::{pick_empty_cell, SimpleRng};
use crate::rules::evaluate;
use crate::types::{Outcome, Player, Turn};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Turn,
    winner: Option<Player>,
    rng: SimpleRng,
    /// False until the first confirm dismisses the start prompt.
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed.
    ///
    /// The computer holds the opening move: the first confirm makes it play
    /// and hands the turn to the human.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            turn: Turn::Computer,
            winner: None,
            rng: SimpleRng::new(seed),
            started: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// How the current game ended, or `None` while it is still running
    pub fn outcome(&self) -> Option<Outcome> {
        match (self.turn, self.winner) {
            (_, Some(player)) => Some(Outcome::Won(player)),
            (Turn::GameOver, None) => Some(Outcome::Draw),
            _ => None,
        }
    }

    /// Confirm a move at `index` on behalf of whoever is expected to act.
    ///
    /// Returns true if the board changed.
    pub fn confirm(&mut self, index: usize) -> bool {
        self.started = true;

        match self.turn {
            Turn::GameOver => false,
            Turn::Computer => {
                self.computer_turn();
                true
            }
            Turn::Human => {
                if let Err(err) = self.board.apply_move(index, Player::Human) {
                    debug!(%err, "human move rejected");
                    return false;
                }
                debug!(index, "human moved");

                if self.finish_if_won(Player::Human) {
                    return true;
                }
                self.turn = Turn::Computer;
                self.computer_turn();
                true
            }
        }
    }

    /// Start a new game. Only honoured once the current game is over.
    ///
    /// Returns true if the game was reset.
    pub fn reset(&mut self) -> bool {
        if !self.turn.is_over() {
            debug!(turn = ?self.turn, "reset ignored while game in progress");
            return false;
        }

        self.board.reset();
        self.winner = None;
        self.turn = Turn::Human;
        info!("game reset");
        true
    }

    fn computer_turn(&mut self) {
        let Some(index) = pick_empty_cell(&self.board, &mut self.rng) else {
            self.finish_draw();
            return;
        };

        // pick_empty_cell only yields empty in-range cells.
        let placed = self.board.apply_move(index, Player::Computer);
        debug_assert!(placed.is_ok(), "computer picked cell {index}: {placed:?}");
        if placed.is_err() {
            self.finish_draw();
            return;
        }
        debug!(index, "computer moved");

        if self.finish_if_won(Player::Computer) {
            return;
        }
        // The computer can take the last cell when it opened the game.
        if self.board.is_full() {
            self.finish_draw();
        } else {
            self.turn = Turn::Human;
        }
    }

    fn finish_draw(&mut self) {
        self.turn = Turn::GameOver;
        info!("game over: draw");
    }

    fn finish_if_won(&mut self, mover: Player) -> bool {
        match evaluate(&self.board) {
            Some(winner) => {
                debug_assert_eq!(winner, mover);
                self.winner = Some(winner);
                self.turn = Turn::GameOver;
                info!(winner = winner.as_str(), "game over");
                true
            }
            None => false,
        }
    }

    /// Resume play from an explicit position with `turn` to move.
    ///
    /// The start prompt counts as dismissed. A board that already holds a
    /// completed line records its winner, and a won or full board starts in
    /// `GameOver`, so a finished position can only be left through `reset`.
    pub fn from_parts(board: Board, turn: Turn, seed: u32) -> Self {
        let winner = evaluate(&board);
        let turn = if winner.is_some() || board.is_full() {
            Turn::GameOver
        } else {
            turn
        };
        Self {
            board,
            turn,
            winner,
            rng: SimpleRng::new(seed),
            started: true,
        }
    }
}
