//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.
//! Preconditions gate the transition; postconditions verify the
//! invariant set still holds afterwards.

use crate::action::{Move, MoveError};
use crate::invariants::{InvariantSet, RoundInvariants};
use crate::round::RoundInProgress;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state
/// transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks that the targeted square is empty.
    #[instrument(skip(round))]
    pub fn check(mov: &Move, round: &RoundInProgress) -> Result<(), MoveError> {
        if !round.board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks that the move names the player whose turn it is.
    #[instrument(skip(round))]
    pub fn check(mov: &Move, round: &RoundInProgress) -> Result<(), MoveError> {
        if mov.player != round.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal if the square is empty and
/// it's the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(round))]
    pub fn check(mov: &Move, round: &RoundInProgress) -> Result<(), MoveError> {
        SquareIsEmpty::check(mov, round)?;
        PlayersTurn::check(mov, round)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: square empty, player's turn.
/// Postconditions: the full round invariant set still holds.
pub struct MoveContract;

impl Contract<RoundInProgress, Move> for MoveContract {
    fn pre(round: &RoundInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, round)
    }

    fn post(_before: &RoundInProgress, after: &RoundInProgress) -> Result<(), MoveError> {
        RoundInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
