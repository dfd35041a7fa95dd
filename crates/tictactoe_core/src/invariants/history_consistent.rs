//! History consistency invariant: history and board describe the same game.

use super::Invariant;
use crate::types::Square;
use crate::Engine;

/// Invariant: the play history is consistent with the board.
///
/// The number of history entries equals the number of occupied squares, no
/// position appears twice, and every recorded play matches the mark on its
/// square.
pub struct HistoryConsistentInvariant;

impl Invariant<Engine> for HistoryConsistentInvariant {
    fn holds(engine: &Engine) -> bool {
        let history = engine.history();
        let board = engine.board();

        let occupied = board
            .squares()
            .iter()
            .filter(|s| !matches!(s, Square::Empty))
            .count();
        if occupied != history.len() {
            return false;
        }

        for (i, mov) in history.iter().enumerate() {
            if history[..i].iter().any(|m| m.position == mov.position) {
                return false;
            }
            if board.get(mov.position) != Square::Occupied(mov.player) {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Play history is consistent with the board"
    }
}
