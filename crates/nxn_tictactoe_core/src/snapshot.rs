//! Serializable view of a game for front ends.

use super::controller::{GameState, GameStatus};
use super::history::MoveOrder;
use super::types::{Board, Dimension, Location, Player};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSummary {
    /// History step this row jumps to.
    pub step: usize,
    /// Where the move was played; `None` for the game start.
    pub location: Option<Location>,
    /// Who played the move; `None` for the game start.
    pub player: Option<Player>,
    /// Whether this is the step currently shown.
    pub current: bool,
}

/// Everything a front end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board dimension.
    pub dimension: Dimension,
    /// Board at the current step.
    pub board: Board,
    /// Status at the current step.
    pub status: GameStatus,
    /// Player to move from the current step.
    pub next_mover: Player,
    /// Cells of the winning line, empty unless the game is won.
    pub winning_cells: BTreeSet<usize>,
    /// Step currently shown.
    pub current_step: usize,
    /// Order of `moves`.
    pub move_order: MoveOrder,
    /// Move list, already sorted by `move_order`.
    pub moves: Vec<MoveSummary>,
}

impl From<&GameState> for Snapshot {
    fn from(game: &GameState) -> Self {
        let history = game.history();
        let moves = history
            .steps(game.move_order())
            .into_iter()
            .filter_map(|step| {
                history.get(step).map(|entry| MoveSummary {
                    step,
                    location: entry.location(),
                    player: entry.mover(),
                    current: step == game.current_step(),
                })
            })
            .collect();

        let outcome = game.outcome();
        Self {
            dimension: game.dimension(),
            board: game.board().clone(),
            status: game.status(),
            next_mover: game.next_mover(),
            winning_cells: outcome.winning_cells().clone(),
            current_step: game.current_step(),
            move_order: game.move_order(),
            moves,
        }
    }
}
