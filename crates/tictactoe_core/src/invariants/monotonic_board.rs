//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::types::{Board, Square};
use crate::Engine;

/// Invariant: board squares are monotonic (never overwritten).
///
/// Once a square transitions from Empty to Occupied, it never changes until
/// restart. Verified by replaying the history onto a fresh board and
/// comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<Engine> for MonotonicBoardInvariant {
    fn holds(engine: &Engine) -> bool {
        let mut reconstructed = Board::new();

        for mov in engine.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
