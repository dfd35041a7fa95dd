//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board according to tic-tac-toe rules.
//! Rules are separated from board storage so the engine and the tests
//! compute outcomes through the same code path.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, LINES};
