//! Draw detection for N×N tic-tac-toe.

use super::super::{Board, Location, Square};
use super::win::detect;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is full and the last move did not win.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, location: Option<Location>) -> bool {
    is_full(board) && !detect(board, location).is_win()
}
