//! Contract-based validation for plays.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style `{P} action {Q}`. A failed precondition is not an
//! error here: it is the reason a play is ignored.

use super::action::Rejection;
use super::invariants::{GameInvariants, InvariantSet};
use super::state::GameState;
use super::Position;
use derive_more::{Display, Error};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ContractViolation>;
}

/// A postcondition that failed after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Postcondition failed: {}", message)]
pub struct ContractViolation {
    /// Descriptions of the failed checks, joined.
    pub message: String,
}

// ─────────────────────────────────────────────────────────────
//  Play Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the shown board is not yet won or drawn.
pub struct GameUndecided;

impl GameUndecided {
    /// Checks the shown board's verdict.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), Rejection> {
        if game.verdict().is_decided() {
            Err(Rejection::GameDecided)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the target square on the shown board.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &GameState) -> Result<(), Rejection> {
        if game.current_board().is_empty(position) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(position))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for [`GameState::play`].
///
/// Preconditions, in order:
/// - Shown board is undecided
/// - Target square is empty
///
/// Postconditions:
/// - History grew by exactly one entry past the old step
/// - Step advanced by one
/// - All [`GameInvariants`] hold
pub struct PlayContract;

impl Contract<GameState, Position> for PlayContract {
    fn pre(game: &GameState, position: &Position) -> Result<(), Rejection> {
        GameUndecided::check(game)?;
        SquareIsEmpty::check(*position, game)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), ContractViolation> {
        let mut failures = Vec::new();

        if after.step_number() != before.step_number() + 1 {
            failures.push("step advanced by one".to_string());
        }
        if after.history().len() != before.step_number() + 2 {
            failures.push("history truncated to the old step plus one entry".to_string());
        }
        if after.history()[..after.history().len().min(before.step_number() + 1)]
            != before.history()[..before.step_number() + 1]
        {
            failures.push("entries up to the old step unchanged".to_string());
        }
        if let Err(violations) = GameInvariants::check_all(after) {
            failures.extend(violations.into_iter().map(|v| v.description));
        }

        if failures.is_empty() {
            Ok(())
        } else {
            warn!(?failures, "Play postcondition violated");
            Err(ContractViolation {
                message: failures.join("; "),
            })
        }
    }
}
