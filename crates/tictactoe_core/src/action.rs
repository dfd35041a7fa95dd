//! First-class play actions and their rejection taxonomy.
//!
//! Plays are domain events, not side effects: the engine records each
//! successful play as a [`Move`] so the game can be replayed and its
//! invariants verified against the history.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A play in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Rejection returned when a play cannot be applied.
///
/// All three variants are local and recoverable: a rejected play leaves the
/// engine bit-for-bit unchanged, and the caller may simply try another cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// The cell index is outside 0-8.
    #[display("Cell index {_0} is out of range (0-8)")]
    InvalidCell(usize),

    /// The target square is already occupied.
    #[display("{_0} is already occupied")]
    CellOccupied(Position),

    /// The game has ended; restart to play again.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for PlayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mov = Move::new(Player::X, Position::Center);
        assert_eq!(mov.to_string(), "X -> Center");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PlayError::InvalidCell(12).to_string(),
            "Cell index 12 is out of range (0-8)"
        );
        assert_eq!(
            PlayError::CellOccupied(Position::TopLeft).to_string(),
            "Top-left is already occupied"
        );
        assert_eq!(PlayError::GameAlreadyOver.to_string(), "Game is already over");
    }
}
