//! Single-cell delta invariant: each step adds exactly one mark.

use super::super::{GameState, HistoryEntry};
use super::Invariant;

/// Invariant: consecutive history entries differ in exactly one cell.
///
/// Entry 0 is an empty board with no location. Every later entry names a
/// location, and its board equals the previous one except at that cell,
/// which went from empty to a mark.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        let Some(initial) = history.get(0) else {
            return false;
        };

        let initial_is_blank = initial.location().is_none()
            && initial.board().squares().iter().all(|s| s.is_empty());

        initial_is_blank
            && history
                .iter()
                .zip(history.iter().skip(1))
                .all(|(previous, next)| adds_one_mark(previous, next))
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark at its location"
    }
}

fn adds_one_mark(previous: &HistoryEntry, next: &HistoryEntry) -> bool {
    if previous.board().dimension() != next.board().dimension() {
        return false;
    }

    let Some(cell) = next.location().and_then(|l| next.board().index_of(l)) else {
        return false;
    };

    let changed: Vec<usize> = previous
        .board()
        .squares()
        .iter()
        .zip(next.board().squares())
        .enumerate()
        .filter(|(_, (before, after))| before != after)
        .map(|(index, _)| index)
        .collect();

    changed == [cell] && previous.board().is_empty(cell) && !next.board().is_empty(cell)
}
