//! Contract-based move validation.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`. A failed precondition means the move is ignored; a
//! failed postcondition means the engine itself is broken.

use super::error::MoveRejection;
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::GameState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell index exists on the board.
pub struct SquareInBounds;

impl SquareInBounds {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(cell: usize, game: &GameState) -> Result<(), MoveRejection> {
        match game.board().get(cell) {
            Some(_) => Ok(()),
            None => Err(MoveRejection::OutOfBounds { cell }),
        }
    }
}

/// Precondition: the cell is empty on the board at the current step.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(cell: usize, game: &GameState) -> Result<(), MoveRejection> {
        if game.board().is_empty(cell) {
            Ok(())
        } else {
            Err(MoveRejection::SquareOccupied { cell })
        }
    }
}

/// Precondition: nobody has won at the current step.
pub struct GameUndecided;

impl GameUndecided {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveRejection> {
        match game.outcome().winner() {
            Some(winner) => Err(MoveRejection::GameDecided { winner }),
            None => Ok(()),
        }
    }
}

/// Composite precondition, checked in order: in bounds, empty, undecided.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(cell: usize, game: &GameState) -> Result<(), MoveRejection> {
        SquareInBounds::check(cell, game)?;
        SquareIsEmpty::check(cell, game)?;
        GameUndecided::check(game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark at a cell index.
///
/// Postconditions:
/// - the history ends one entry after the step the move was played from
/// - the cursor sits on that new entry
/// - every [`GameInvariants`] member holds
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(game: &GameState, cell: &usize) -> Result<(), MoveRejection> {
        LegalMove::check(*cell, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match GameInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        let expected_step = before.current_step() + 1;
        if after.current_step() != expected_step || after.history().len() != expected_step + 1 {
            violations.push(InvariantViolation::new(
                "Move appends exactly one entry after the current step",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            for violation in &violations {
                warn!(%violation, "Move postcondition failed");
            }
            Err(violations)
        }
    }
}
