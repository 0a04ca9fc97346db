//! Win detection for N×N tic-tac-toe.
//!
//! Only lines through the most recent move can have become complete, so the
//! detector starts from that move instead of scanning the whole board.

use super::super::{Board, Location, Player, Square};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// A line of N cells that can win the game.
///
/// Variants are declared in the order the detector checks them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Line {
    /// The row through the move.
    #[display("row")]
    Row,
    /// The column through the move.
    #[display("column")]
    Column,
    /// Top-left to bottom-right, where `row == col`.
    #[display("primary diagonal")]
    PrimaryDiagonal,
    /// Top-right to bottom-left, where `row + col == N - 1`.
    #[display("secondary diagonal")]
    SecondaryDiagonal,
}

impl Line {
    /// Checks whether this line passes through `location` on an `n`-wide board.
    pub fn passes_through(self, location: Location, n: usize) -> bool {
        match self {
            Line::Row | Line::Column => true,
            Line::PrimaryDiagonal => location.row == location.col,
            Line::SecondaryDiagonal => location.row + location.col == n - 1,
        }
    }

    /// Row-major indices of the cells on this line through `location`.
    pub fn cells(self, location: Location, n: usize) -> impl Iterator<Item = usize> {
        (0..n).map(move |i| match self {
            Line::Row => location.row * n + i,
            Line::Column => i * n + location.col,
            Line::PrimaryDiagonal => i * n + i,
            Line::SecondaryDiagonal => i * n + (n - 1 - i),
        })
    }
}

/// Result of checking the most recent move for a win.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WinOutcome {
    winner: Option<Player>,
    winning_cells: BTreeSet<usize>,
    line: Option<Line>,
}

impl WinOutcome {
    /// Returns the winner, if the move completed a line.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the cells of the completed line, including the move itself.
    ///
    /// Empty when there is no winner.
    pub fn winning_cells(&self) -> &BTreeSet<usize> {
        &self.winning_cells
    }

    /// Returns which line was completed.
    pub fn line(&self) -> Option<Line> {
        self.line
    }

    /// Checks whether the move won the game.
    pub fn is_win(&self) -> bool {
        self.winner.is_some()
    }

    /// Checks whether `cell` is part of the winning line.
    pub fn contains(&self, cell: usize) -> bool {
        self.winning_cells.contains(&cell)
    }
}

/// Determines whether the move at `location` won the game.
///
/// Lines are tried in [`Line`] order and the first one filled entirely with
/// the mover's mark wins. `None` means the board is the initial one and
/// there is nothing to check.
#[instrument(skip(board), fields(dimension = %board.dimension()))]
pub fn detect(board: &Board, location: Option<Location>) -> WinOutcome {
    let Some(location) = location else {
        return WinOutcome::default();
    };

    let Some(pos) = board.index_of(location) else {
        warn!(%location, "Move location lies outside the board");
        return WinOutcome::default();
    };

    let Some(Square::Occupied(mark)) = board.get(pos) else {
        warn!(%location, "Move location holds no mark");
        return WinOutcome::default();
    };

    let n = board.size();
    let found = Line::iter()
        .filter(|line| line.passes_through(location, n))
        .find_map(|line| {
            scan_line(board, line, location, pos, mark).map(|cells| (line, cells))
        });

    let Some((line, mut winning_cells)) = found else {
        return WinOutcome::default();
    };

    // scan_line only succeeds with all N - 1 other cells, so this always
    // completes the line.
    winning_cells.insert(pos);

    debug!(winner = %mark, %line, cells = ?winning_cells, "Winning line found");
    WinOutcome {
        winner: Some(mark),
        winning_cells,
        line: Some(line),
    }
}

/// Collects the other cells on `line` if all of them hold `mark`.
fn scan_line(
    board: &Board,
    line: Line,
    location: Location,
    pos: usize,
    mark: Player,
) -> Option<BTreeSet<usize>> {
    let mut cells = BTreeSet::new();
    for index in line.cells(location, board.size()) {
        if index == pos {
            continue;
        }
        if board.get(index) != Some(Square::Occupied(mark)) {
            return None;
        }
        cells.insert(index);
    }
    Some(cells)
}
