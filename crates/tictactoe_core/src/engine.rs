//! The game engine: an owned, mutable tic-tac-toe instance.
//!
//! The engine holds the board, the turn, and the play history. The outcome
//! and the game-over flag are always derived from the board through the
//! [`rules`](crate::rules) functions, never stored separately, so they
//! cannot drift out of sync with the squares.

use crate::action::{Move, PlayError};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Derived result of the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winning player.
        winner: Player,
        /// The completed line, in board order.
        line: [Position; 3],
    },
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns true if the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner, if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line, if there is one.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won { winner, .. } => write!(f, "Player {winner} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Snapshot of the engine's observable state, returned by [`Engine::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Whose mark the next valid play places.
    pub to_move: Player,
    /// True once the outcome is terminal; cleared only by restart.
    pub game_over: bool,
    /// The derived outcome of the current board.
    pub outcome: Outcome,
}

/// An owned tic-tac-toe game.
///
/// One engine is one game session. There is no hidden global state, so
/// callers can hold several independent games and tests can construct
/// engines freely.
///
/// Rejected plays are atomic: on any [`PlayError`] the board, turn, and
/// history are unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engine {
    board: Board,
    to_move: Player,
    history: Vec<Move>,
}

impl Engine {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
        }
    }

    /// Plays the current player's mark at the given cell index (0-8).
    ///
    /// Returns the new outcome on success.
    ///
    /// # Errors
    ///
    /// - [`PlayError::InvalidCell`] if `index` is outside 0-8
    /// - [`PlayError::GameAlreadyOver`] if the game has ended
    /// - [`PlayError::CellOccupied`] if the square is taken
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, index: usize) -> Result<Outcome, PlayError> {
        let pos = Position::from_index(index).ok_or(PlayError::InvalidCell(index))?;
        self.play_at(pos)
    }

    /// Plays the current player's mark at the given position.
    ///
    /// Same semantics as [`Engine::play`], minus the index-range check.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play_at(&mut self, pos: Position) -> Result<Outcome, PlayError> {
        if self.is_over() {
            return Err(PlayError::GameAlreadyOver);
        }
        if !self.board.is_empty(pos) {
            return Err(PlayError::CellOccupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));

        let outcome = self.outcome();
        if !outcome.is_terminal() {
            self.to_move = player.opponent();
        }

        debug!(%player, position = %pos, %outcome, "Play applied");
        crate::invariants::assert_invariants(self);

        Ok(outcome)
    }

    /// Resets to the initial state: empty board, X to move, game not over.
    ///
    /// Always succeeds, from any state. Idempotent.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        *self = Engine::new();
    }

    /// Returns a snapshot of the observable state.
    pub fn status(&self) -> Status {
        let outcome = self.outcome();
        Status {
            to_move: self.to_move,
            game_over: outcome.is_terminal(),
            outcome,
        }
    }

    /// Computes the outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        if let Some((winner, line)) = rules::check_winner(&self.board) {
            Outcome::Won { winner, line }
        } else if rules::is_full(&self.board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Returns the square at the given cell index, or `None` if out of range.
    pub fn cell(&self, index: usize) -> Option<Square> {
        Position::from_index(index).map(|pos| self.board.get(pos))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next valid play places.
    ///
    /// While the game is over this stays on the player who moved last;
    /// restart resets it to X.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Returns the plays made since the last restart, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_initial_state() {
        let engine = Engine::new();
        assert_eq!(engine.to_move(), Player::X);
        assert!(!engine.is_over());
        assert_eq!(engine.outcome(), Outcome::InProgress);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_play_toggles_turn() {
        let mut engine = Engine::new();
        engine.play(4).expect("center is empty");
        assert_eq!(engine.to_move(), Player::O);
        engine.play(0).expect("corner is empty");
        assert_eq!(engine.to_move(), Player::X);
    }

    #[test]
    fn test_winning_play_does_not_toggle_turn() {
        let mut engine = Engine::new();
        for index in [0, 3, 1, 4] {
            engine.play(index).expect("valid play");
        }
        let outcome = engine.play(2).expect("winning play");
        assert_eq!(outcome.winner(), Some(Player::X));
        assert_eq!(engine.to_move(), Player::X);
    }

    #[test]
    fn test_status_reflects_outcome() {
        let mut engine = Engine::new();
        let status = engine.status();
        assert_eq!(status.to_move, Player::X);
        assert!(!status.game_over);

        for index in [0, 3, 1, 4, 2] {
            engine.play(index).expect("valid play");
        }
        let status = engine.status();
        assert!(status.game_over);
        assert_eq!(status.outcome.winner(), Some(Player::X));
    }

    #[test]
    fn test_cell_read() {
        let mut engine = Engine::new();
        engine.play(4).expect("center is empty");
        assert_eq!(engine.cell(4), Some(Square::Occupied(Player::X)));
        assert_eq!(engine.cell(0), Some(Square::Empty));
        assert_eq!(engine.cell(9), None);
    }

    #[test]
    fn test_outcome_serializes_with_line() {
        // The presenter reads the winning line out of the outcome; pin the
        // exposed shape.
        let outcome = Outcome::Won {
            winner: Player::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        };
        let json = serde_json::to_string(&outcome).expect("serializable");
        assert!(json.contains("winner"));
        assert!(json.contains("line"));
        let back: Outcome = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, outcome);
    }
}
