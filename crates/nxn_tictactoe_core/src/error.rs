//! Error types for the game core.
//!
//! Only [`InvalidStep`] and [`DimensionError`] are real errors. A
//! [`MoveRejection`] explains why a move was ignored; the regular move path
//! swallows it and hands back the unchanged state.

use super::types::{Dimension, Player};
use derive_more::{Display, Error};

/// A history step outside `[0, len)` was requested.
///
/// Front ends only offer steps that exist, so hitting this is a
/// programming error rather than a game condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Step {} is out of range for a history of {} entries", step, len)]
pub struct InvalidStep {
    /// The requested step.
    pub step: usize,
    /// Number of entries in the history at the time of the request.
    pub len: usize,
}

/// A board outside the supported size range was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display(
    "Board dimension must be between {} and {}, got {}",
    Dimension::MIN,
    Dimension::MAX,
    requested
)]
pub struct DimensionError {
    /// The rejected dimension.
    pub requested: usize,
}

/// Reason a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveRejection {
    /// The cell index does not exist on this board.
    #[display("Cell {} is outside the board", cell)]
    OutOfBounds {
        /// The rejected cell index.
        cell: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", cell)]
    SquareOccupied {
        /// The rejected cell index.
        cell: usize,
    },

    /// The board at the current step already has a winner.
    #[display("Game is already won by {}", winner)]
    GameDecided {
        /// Winner at the current step.
        winner: Player,
    },

    /// The history cursor did not point at a recorded step.
    #[display("{}", _0)]
    InvalidStep(InvalidStep),
}

impl From<InvalidStep> for MoveRejection {
    fn from(err: InvalidStep) -> Self {
        Self::InvalidStep(err)
    }
}
