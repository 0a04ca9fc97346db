//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: players alternate turns.
///
/// The move producing entry `k` was made by X when `k - 1` is even and by
/// O otherwise, and the player to move matches the parity of the current
/// step.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let marks_alternate = game
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, entry)| entry.mover() == Some(Player::for_step(step - 1)));

        marks_alternate && game.next_mover() == Player::for_step(game.current_step())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
