//! Core domain types for N×N tic-tac-toe.

use super::error::{DimensionError, MoveRejection};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player who moves next once `step` moves have been made.
    ///
    /// X on even steps, O on odd steps.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// Side length of a square board.
///
/// Boards narrower than two cells are rejected: with a single cell every
/// line is just the move itself and winning-line highlighting degenerates.
/// Boards wider than [`Dimension::MAX`] are rejected so the cell count
/// always fits in memory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct Dimension(usize);

impl Dimension {
    /// Smallest supported dimension.
    pub const MIN: usize = 2;

    /// Largest supported dimension.
    pub const MAX: usize = 1024;

    /// Classic 3×3 board.
    pub const CLASSIC: Dimension = Dimension(3);

    /// Validates a dimension.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, DimensionError> {
        let in_range = (Self::MIN..=Self::MAX).contains(&size);
        match size.checked_mul(size) {
            Some(_) if in_range => Ok(Self(size)),
            _ => Err(DimensionError { requested: size }),
        }
    }

    /// Number of cells along one side.
    pub fn get(self) -> usize {
        self.0
    }

    /// Total number of cells on the board.
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl TryFrom<usize> for Dimension {
    type Error = DimensionError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<Dimension> for usize {
    fn from(dimension: Dimension) -> Self {
        dimension.0
    }
}

/// Row and column of a cell.
///
/// Displayed column first, `(col, row)`, which is how move lists label it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("({}, {})", col, row)]
pub struct Location {
    /// Zero-based row, top to bottom.
    pub row: usize,
    /// Zero-based column, left to right.
    pub col: usize,
}

impl Location {
    /// Creates a location.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// N×N board stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    dimension: Dimension,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            squares: vec![Square::Empty; dimension.cell_count()],
        }
    }

    /// Returns the board dimension.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Number of cells along one side.
    pub fn size(&self) -> usize {
        self.dimension.get()
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Gets the square at the given location.
    pub fn get_at(&self, location: Location) -> Option<Square> {
        self.index_of(location).and_then(|index| self.get(index))
    }

    /// Sets the square at the given index.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), MoveRejection> {
        let slot = self
            .squares
            .get_mut(index)
            .ok_or(MoveRejection::OutOfBounds { cell: index })?;
        *slot = square;
        Ok(())
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Converts a location to a row-major index.
    pub fn index_of(&self, location: Location) -> Option<usize> {
        let n = self.size();
        (location.row < n && location.col < n).then(|| location.row * n + location.col)
    }

    /// Converts a row-major index to a location.
    pub fn location_of(&self, index: usize) -> Option<Location> {
        let n = self.size();
        (index < self.squares.len()).then(|| Location::new(index / n, index % n))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates the board one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size())
    }

    /// Returns the board mirrored across its primary diagonal.
    pub fn transposed(&self) -> Self {
        let n = self.size();
        let squares = (0..self.squares.len())
            .map(|index| self.squares[(index % n) * n + index / n])
            .collect();
        Self {
            dimension: self.dimension,
            squares,
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let line = row
                .iter()
                .map(|square| match square {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(player) => player.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
