//! Linear game history with time travel.
//!
//! The history is a single timeline of board snapshots. Playing a move
//! from an earlier step overwrites everything after that step; there is no
//! tree of alternative futures.

use super::error::InvalidStep;
use super::types::{Board, Dimension, Location, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Order in which a move list walks the history.
///
/// Only affects presentation, never the history itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Oldest step first.
    #[default]
    #[display("ascending")]
    Ascending,
    /// Newest step first.
    #[display("descending")]
    Descending,
}

impl MoveOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Board snapshot after a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    location: Option<Location>,
}

impl HistoryEntry {
    /// Creates the entry for an empty board, before any move.
    pub fn initial(dimension: Dimension) -> Self {
        Self {
            board: Board::new(dimension),
            location: None,
        }
    }

    /// Creates an entry for `board` produced by a move at `location`.
    pub fn new(board: Board, location: Location) -> Self {
        Self {
            board,
            location: Some(location),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns where the move producing this board was placed.
    ///
    /// `None` only for the initial board.
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Returns the mark placed by the move producing this board.
    pub fn mover(&self) -> Option<Player> {
        self.location
            .and_then(|location| self.board.get_at(location))
            .and_then(|square| square.player())
    }
}

/// Sequence of snapshots, one per move plus the initial empty board.
///
/// Entries are shared between histories, so recording a move leaves the
/// history it was recorded on untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<Arc<HistoryEntry>>,
}

impl History {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new(dimension: Dimension) -> Self {
        Self {
            entries: vec![Arc::new(HistoryEntry::initial(dimension))],
        }
    }

    /// Number of entries, including the initial board.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the initial board is never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `step`.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step).map(Arc::as_ref)
    }

    /// Returns the most recent entry.
    pub fn latest(&self) -> &HistoryEntry {
        &self.entries[self.entries.len() - 1]
    }

    /// Returns the board dimension shared by every entry.
    pub fn dimension(&self) -> Dimension {
        self.entries[0].board().dimension()
    }

    /// Iterates entries from the initial board onward.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().map(Arc::as_ref)
    }

    /// Returns every step index in the requested order.
    pub fn steps(&self, order: MoveOrder) -> Vec<usize> {
        let steps = 0..self.entries.len();
        match order {
            MoveOrder::Ascending => steps.collect(),
            MoveOrder::Descending => steps.rev().collect(),
        }
    }

    /// Checks that `step` names an existing entry.
    pub fn validate_step(&self, step: usize) -> Result<usize, InvalidStep> {
        if step < self.entries.len() {
            Ok(step)
        } else {
            Err(InvalidStep {
                step,
                len: self.entries.len(),
            })
        }
    }

    /// Returns a new history with entries `0..=at_step` followed by `entry`.
    ///
    /// Entries after `at_step` are discarded in the result. `self` is not
    /// modified.
    #[instrument(skip(self, entry), fields(len = self.entries.len()))]
    pub fn record_move(&self, at_step: usize, entry: HistoryEntry) -> Result<Self, InvalidStep> {
        let at_step = self.validate_step(at_step)?;
        let discarded = self.entries.len() - at_step - 1;
        if discarded > 0 {
            debug!(discarded, "Overwriting later steps");
        }

        let mut entries = Vec::with_capacity(at_step + 2);
        entries.extend(self.entries[..=at_step].iter().cloned());
        entries.push(Arc::new(entry));
        Ok(Self { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn entry_after(previous: &HistoryEntry, cell: usize, player: Player) -> HistoryEntry {
        let mut board = previous.board().clone();
        board.set(cell, Square::Occupied(player)).unwrap();
        let location = board.location_of(cell).unwrap();
        HistoryEntry::new(board, location)
    }

    fn history_of(cells: &[usize]) -> History {
        let mut history = History::new(Dimension::CLASSIC);
        for (step, &cell) in cells.iter().enumerate() {
            let entry = entry_after(history.latest(), cell, Player::for_step(step));
            history = history.record_move(step, entry).unwrap();
        }
        history
    }

    #[test]
    fn test_new_history_holds_initial_board() {
        let history = History::new(Dimension::CLASSIC);
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.latest().location(), None);
        assert_eq!(history.latest().mover(), None);
    }

    #[test]
    fn test_record_appends_at_latest_step() {
        let history = history_of(&[4, 0]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.latest().location(), Some(Location::new(0, 0)));
        assert_eq!(history.latest().mover(), Some(Player::O));
    }

    #[test]
    fn test_record_truncates_later_steps() {
        let history = history_of(&[4, 0, 8, 2]);
        let replacement = entry_after(history.get(1).unwrap(), 6, Player::O);

        let rewritten = history.record_move(1, replacement).unwrap();
        assert_eq!(rewritten.len(), 3);
        assert_eq!(rewritten.latest().location(), Some(Location::new(2, 0)));
        assert_eq!(rewritten.get(1), history.get(1));
    }

    #[test]
    fn test_record_leaves_original_untouched() {
        let history = history_of(&[4, 0, 8]);
        let before = history.clone();
        let replacement = entry_after(history.get(0).unwrap(), 1, Player::X);

        let _ = history.record_move(0, replacement).unwrap();
        assert_eq!(history, before);
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn test_record_rejects_unknown_step() {
        let history = history_of(&[4]);
        let entry = entry_after(history.latest(), 0, Player::O);
        assert_eq!(
            history.record_move(2, entry),
            Err(InvalidStep { step: 2, len: 2 })
        );
    }

    #[test]
    fn test_validate_step_bounds() {
        let history = history_of(&[4, 0]);
        assert_eq!(history.validate_step(0), Ok(0));
        assert_eq!(history.validate_step(2), Ok(2));
        assert_eq!(history.validate_step(3), Err(InvalidStep { step: 3, len: 3 }));
    }

    #[test]
    fn test_steps_follow_move_order() {
        let history = history_of(&[4, 0]);
        assert_eq!(history.steps(MoveOrder::Ascending), vec![0, 1, 2]);
        assert_eq!(history.steps(MoveOrder::Descending), vec![2, 1, 0]);
        assert_eq!(MoveOrder::Ascending.toggle(), MoveOrder::Descending);
    }
}
