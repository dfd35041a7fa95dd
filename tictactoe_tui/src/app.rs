//! Application state and input handling.

use crossterm::event::KeyCode;
use tictactoe_core::{Engine, Outcome, Position};
use tracing::debug;

use crate::input::move_cursor;

/// Main application state: the engine plus presentation-only state
/// (cursor and status line).
pub struct App {
    engine: Engine,
    cursor: Position,
    status_message: String,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            cursor: Position::Center,
            status_message: "Player X's turn".to_string(),
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles a key press. Returns false when the app should exit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return false,
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10) {
                    if (1..=9).contains(&digit) {
                        self.play(digit as usize - 1);
                    }
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let cursor = self.cursor;
                self.play(cursor.to_index());
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
        true
    }

    /// Forwards a play to the engine and rewrites the status line from the
    /// result. Rejections are surfaced, never swallowed.
    fn play(&mut self, index: usize) {
        match self.engine.play(index) {
            Ok(Outcome::InProgress) => {
                self.status_message = format!("Player {}'s turn", self.engine.to_move());
            }
            Ok(Outcome::Won { winner, .. }) => {
                self.status_message =
                    format!("Player {winner} wins! Press 'r' to restart or 'q' to quit.");
            }
            Ok(Outcome::Draw) => {
                self.status_message =
                    "It's a draw! Press 'r' to restart or 'q' to quit.".to_string();
            }
            Err(err) => {
                debug!(index, error = %err, "Play rejected");
                self.status_message = err.to_string();
            }
        }
    }

    /// Restarts the game.
    fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.restart();
        self.cursor = Position::Center;
        self.status_message = "Game restarted. Player X's turn".to_string();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
