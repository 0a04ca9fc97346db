//! Cursor invariant: the current step names a recorded entry.

use super::super::GameState;
use super::Invariant;

/// Invariant: `current_step` lies in `[0, history.len())`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step points at a recorded history entry"
    }
}
