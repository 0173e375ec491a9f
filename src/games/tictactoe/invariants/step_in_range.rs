//! Step range invariant: the current step always points into history.

use super::super::GameState;
use super::Invariant;

/// Invariant: `step_number < history.len()`.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        game.step_number() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step indexes an existing history entry"
    }
}
