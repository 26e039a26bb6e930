//! RNG module - computer move generation
//!
//! The computer opponent has no strategy: it picks a uniformly random empty
//! cell. Selection is rejection sampling with replacement over all 9 indices,
//! drawing again whenever the sampled cell is taken.
//!
//! Also provides a simple LCG so games are reproducible from a seed.

use crate::board::Board;
use crate::types::CELL_COUNT;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales from the high bits; the low bits of a power-of-two LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (the seed that would reproduce the rest of the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Pick a uniformly random empty cell for the computer.
///
/// Returns `None` only when the board is full.
pub fn pick_empty_cell(board: &Board, rng: &mut SimpleRng) -> Option<usize> {
    if board.is_full() {
        return None;
    }

    loop {
        let idx = rng.next_range(CELL_COUNT as u32) as usize;
        if board.is_empty_at(idx) {
            return Some(idx);
        }
    }
}
