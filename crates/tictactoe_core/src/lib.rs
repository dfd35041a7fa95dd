//! Pure tic-tac-toe game logic.
//!
//! This crate contains no I/O and no rendering. It provides:
//!
//! - **Types**: [`Board`], [`Player`], [`Square`], [`Position`]
//! - **Rules**: pure functions for win and draw detection ([`rules`])
//! - **Engine**: an owned game instance with `play`/`restart`/`status`
//!   operations ([`Engine`])
//! - **Invariants**: first-class checks of the engine's guarantees
//!   ([`invariants`])
//!
//! A frontend drives the engine by forwarding input to [`Engine::play`] and
//! re-reading state through [`Engine::status`], [`Engine::cell`], and
//! [`Engine::board`] after every call.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Engine, Outcome, Player};
//!
//! let mut engine = Engine::new();
//! assert_eq!(engine.to_move(), Player::X);
//!
//! let outcome = engine.play(4).expect("center is empty");
//! assert_eq!(outcome, Outcome::InProgress);
//! assert_eq!(engine.to_move(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, PlayError};
pub use engine::{Engine, Outcome, Status};
pub use position::Position;
pub use types::{Board, Player, Square};

/// Alias for clarity in frontend code: a player's mark on the board.
pub type Mark = Player;
