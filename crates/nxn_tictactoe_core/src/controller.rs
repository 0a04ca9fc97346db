//! Game controller: turn order, move legality and time travel.
//!
//! [`GameState`] transitions are pure: every operation returns a new state
//! and leaves the receiver alone. [`GameController`] holds the one
//! authoritative state for a front end and swaps it wholesale per event.

use super::contracts::{Contract, MoveContract};
use super::error::{InvalidStep, MoveRejection};
use super::history::{History, HistoryEntry, MoveOrder};
use super::rules::{WinOutcome, detect, is_full};
use super::snapshot::Snapshot;
use super::types::{Board, Dimension, Player, Square};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Status of the board at the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// Moves are still possible.
    #[display("In progress")]
    InProgress,
    /// The last move completed a line.
    #[display("Won by {}", _0)]
    Won(Player),
    /// The board is full and nobody won.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Returns true if no further moves are accepted.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete game state: history, cursor and presentation flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) current_step: usize,
    pub(crate) next_mover: Player,
    pub(crate) move_order: MoveOrder,
}

impl GameState {
    /// Creates a new game on an empty board.
    #[instrument]
    pub fn new(dimension: Dimension) -> Self {
        Self {
            history: History::new(dimension),
            current_step: 0,
            next_mover: Player::for_step(0),
            move_order: MoveOrder::default(),
        }
    }

    /// Returns the board dimension.
    pub fn dimension(&self) -> Dimension {
        self.history.dimension()
    }

    /// Returns the full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the step currently shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the player who moves next from the current step.
    pub fn next_mover(&self) -> Player {
        self.next_mover
    }

    /// Returns the order in which move lists are presented.
    pub fn move_order(&self) -> MoveOrder {
        self.move_order
    }

    /// Returns the history entry at the current step.
    pub fn current_entry(&self) -> &HistoryEntry {
        self.history
            .get(self.current_step)
            .unwrap_or_else(|| self.history.latest())
    }

    /// Returns the board at the current step.
    pub fn board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Runs win detection on the current step.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn outcome(&self) -> WinOutcome {
        let entry = self.current_entry();
        detect(entry.board(), entry.location())
    }

    /// Derives the status at the current step.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.outcome().winner() {
            GameStatus::Won(winner)
        } else if is_full(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Plays `cell` for the next mover, or returns an equal state if the
    /// move is not allowed.
    ///
    /// Ignored moves are not errors: clicking an occupied cell or playing
    /// on after a win simply has no effect. Use
    /// [`try_apply_move`](Self::try_apply_move) to learn why.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_mover))]
    pub fn apply_move(&self, cell: usize) -> Self {
        match self.try_apply_move(cell) {
            Ok(next) => next,
            Err(rejection) => {
                debug!(%rejection, "Move ignored");
                self.clone()
            }
        }
    }

    /// Plays `cell` for the next mover.
    ///
    /// Any moves recorded after the current step are discarded.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition: cell out of bounds, cell
    /// occupied, or game already won at the current step.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_mover))]
    pub fn try_apply_move(&self, cell: usize) -> Result<Self, MoveRejection> {
        MoveContract::pre(self, &cell)?;

        let mut board = self.board().clone();
        board.set(cell, Square::Occupied(self.next_mover))?;
        let location = board
            .location_of(cell)
            .ok_or(MoveRejection::OutOfBounds { cell })?;

        let history = self
            .history
            .record_move(self.current_step, HistoryEntry::new(board, location))?;
        let current_step = history.len() - 1;

        let next = Self {
            history,
            current_step,
            next_mover: Player::for_step(current_step),
            move_order: self.move_order,
        };

        debug_assert!(
            MoveContract::post(self, &next).is_ok(),
            "move broke a game invariant"
        );

        debug!(%location, step = current_step, "Move applied");
        Ok(next)
    }

    /// Shows the board as it was at `step`.
    ///
    /// The history is untouched; the next mover is derived from the step
    /// alone, so jumping is idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStep`] if `step` is not in the history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<Self, InvalidStep> {
        let step = self.history.validate_step(step)?;
        Ok(Self {
            history: self.history.clone(),
            current_step: step,
            next_mover: Player::for_step(step),
            move_order: self.move_order,
        })
    }

    /// Flips the move-list order. Nothing else changes.
    #[instrument(skip(self), fields(order = %self.move_order))]
    pub fn toggle_move_order(&self) -> Self {
        Self {
            move_order: self.move_order.toggle(),
            ..self.clone()
        }
    }

    /// Builds the serializable view of this state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}

/// Owner of the authoritative game state for a front end.
///
/// Each inbound event replaces the state as a whole, so readers never
/// observe a history and cursor from different moments.
#[derive(Debug, Clone)]
pub struct GameController {
    state: GameState,
}

impl GameController {
    /// Starts a new game.
    #[instrument]
    pub fn new(dimension: Dimension) -> Self {
        info!(%dimension, "Starting new game");
        Self {
            state: GameState::new(dimension),
        }
    }

    /// Wraps an existing state.
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Handles a click on `cell`.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, cell: usize) -> &GameState {
        self.state = self.state.apply_move(cell);
        &self.state
    }

    /// Handles a click on a history entry.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStep`] and keeps the current state if `step` is
    /// not in the history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<&GameState, InvalidStep> {
        self.state = self.state.jump_to(step)?;
        Ok(&self.state)
    }

    /// Handles the sort button.
    #[instrument(skip(self))]
    pub fn toggle_move_order(&mut self) -> &GameState {
        self.state = self.state.toggle_move_order();
        &self.state
    }

    /// Discards the game and starts over on an empty board of the same
    /// size, keeping the move-list order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> &GameState {
        info!("Restarting game");
        let move_order = self.state.move_order;
        self.state = GameState {
            move_order,
            ..GameState::new(self.state.dimension())
        };
        &self.state
    }

    /// Builds the serializable view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Location;

    fn play(dimension: usize, cells: &[usize]) -> GameState {
        cells
            .iter()
            .fold(GameState::new(Dimension::new(dimension).unwrap()), |game, &cell| {
                game.apply_move(cell)
            })
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new(Dimension::CLASSIC);
        assert_eq!(game.current_step(), 0);
        assert_eq!(game.next_mover(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.move_order(), MoveOrder::Ascending);
        assert!(game.outcome().winning_cells().is_empty());
    }

    #[test]
    fn test_move_records_location_and_flips_turn() {
        let game = play(3, &[5]);
        assert_eq!(game.current_step(), 1);
        assert_eq!(game.next_mover(), Player::O);
        assert_eq!(game.current_entry().location(), Some(Location::new(1, 2)));
        assert_eq!(game.board().get(5), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_try_apply_move_reports_rejection() {
        let game = play(3, &[5]);
        assert_eq!(
            game.try_apply_move(5),
            Err(MoveRejection::SquareOccupied { cell: 5 })
        );
        assert_eq!(
            game.try_apply_move(42),
            Err(MoveRejection::OutOfBounds { cell: 42 })
        );
    }

    #[test]
    fn test_out_of_bounds_move_is_ignored() {
        let game = play(3, &[5]);
        assert_eq!(game.apply_move(9), game);
    }

    #[test]
    fn test_win_stops_play() {
        let game = play(3, &[0, 4, 1, 5, 2]);
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert!(game.status().is_over());
        assert_eq!(game.apply_move(8), game);
    }

    #[test]
    fn test_jump_from_won_game_reopens_play() {
        let won = play(3, &[0, 4, 1, 5, 2]);
        let rewound = won.jump_to(4).unwrap();
        assert_eq!(rewound.status(), GameStatus::InProgress);
        assert_eq!(rewound.next_mover(), Player::X);

        let replayed = rewound.apply_move(8);
        assert_eq!(replayed.history().len(), 6);
        assert_eq!(replayed.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_toggle_move_order_keeps_everything_else() {
        let game = play(3, &[0, 4]);
        let toggled = game.toggle_move_order();
        assert_eq!(toggled.move_order(), MoveOrder::Descending);
        assert_eq!(toggled.history(), game.history());
        assert_eq!(toggled.current_step(), game.current_step());
        assert_eq!(toggled.toggle_move_order(), game);
    }

    #[test]
    fn test_controller_replaces_state_per_event() {
        let mut controller = GameController::new(Dimension::CLASSIC);
        controller.apply_move(4);
        controller.apply_move(0);
        assert_eq!(controller.state().current_step(), 2);

        assert!(controller.jump_to(5).is_err());
        assert_eq!(controller.state().current_step(), 2);

        controller.jump_to(1).unwrap();
        controller.toggle_move_order();
        assert_eq!(controller.state().next_mover(), Player::O);
        assert_eq!(controller.state().move_order(), MoveOrder::Descending);
    }

    #[test]
    fn test_controller_restart_keeps_order_and_size() {
        let mut controller = GameController::new(Dimension::new(4).unwrap());
        controller.apply_move(3);
        controller.toggle_move_order();

        let state = controller.restart();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.dimension(), Dimension::new(4).unwrap());
        assert_eq!(state.move_order(), MoveOrder::Descending);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Won(Player::O).to_string(), "Won by O");
        assert_eq!(GameStatus::Draw.to_string(), "Draw");
    }
}
