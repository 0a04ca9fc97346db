//! N×N tic-tac-toe game logic with linear history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: win detection from the most recent move, draw detection
//! - **History**: one snapshot per move, overwritten from the step a new
//!   move is played at
//! - **Controller**: turn order, move legality, jump-to-step
//! - **Contracts and invariants**: preconditions that decide whether a move
//!   is accepted, invariants checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use nxn_tictactoe_core::{Dimension, GameState, GameStatus, Player};
//!
//! let game = [0, 4, 1, 5, 2]
//!     .into_iter()
//!     .fold(GameState::new(Dimension::CLASSIC), |game, cell| game.apply_move(cell));
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//!
//! // Travel back two moves; the history is kept.
//! let earlier = game.jump_to(3).unwrap();
//! assert_eq!(earlier.status(), GameStatus::InProgress);
//! assert_eq!(earlier.history().len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod controller;
mod error;
mod history;
mod invariants;
mod rules;
mod snapshot;
mod types;

// Crate-level exports - Domain types
pub use types::{Board, Dimension, Location, Player, Square};

// Crate-level exports - Errors
pub use error::{DimensionError, InvalidStep, MoveRejection};

// Crate-level exports - Rules
pub use rules::{Line, WinOutcome, detect, is_draw, is_full};

// Crate-level exports - History
pub use history::{History, HistoryEntry, MoveOrder};

// Crate-level exports - Controller
pub use controller::{GameController, GameState, GameStatus};

// Crate-level exports - Contracts and invariants
pub use contracts::{
    Contract, GameUndecided, LegalMove, MoveContract, SquareInBounds, SquareIsEmpty,
};
pub use invariants::{
    AlternatingTurnInvariant, CursorInBoundsInvariant, GameInvariants, Invariant, InvariantSet,
    InvariantViolation, SingleCellDeltaInvariant,
};

// Crate-level exports - Presentation data
pub use snapshot::{MoveSummary, Snapshot};
