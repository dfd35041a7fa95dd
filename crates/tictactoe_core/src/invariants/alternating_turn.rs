//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::types::Player;
use crate::Engine;

/// Invariant: players alternate turns.
///
/// History must show the X, O, X, O, ... pattern with X first. While the
/// game is in progress, `to_move` matches history parity; once the game is
/// over, `to_move` stays on the player who moved last.
pub struct AlternatingTurnInvariant;

impl Invariant<Engine> for AlternatingTurnInvariant {
    fn holds(engine: &Engine) -> bool {
        let history = engine.history();

        if let Some(first) = history.first() {
            if first.player != Player::X {
                return false;
            }
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        if engine.is_over() {
            match history.last() {
                Some(last) => engine.to_move() == last.player,
                None => false,
            }
        } else {
            let expected = if history.len() % 2 == 0 {
                Player::X
            } else {
                Player::O
            };
            engine.to_move() == expected
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_holds() {
        let engine = Engine::new();
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_holds_after_plays() {
        let mut engine = Engine::new();
        for index in [4, 0, 8] {
            engine.play(index).expect("valid play");
        }
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.to_move(), Player::O);
    }

    #[test]
    fn test_holds_after_win() {
        let mut engine = Engine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.play(index).expect("valid play");
        }
        assert!(engine.is_over());
        assert!(AlternatingTurnInvariant::holds(&engine));
    }
}
