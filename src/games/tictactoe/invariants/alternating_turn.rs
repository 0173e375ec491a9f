//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: mark counts match the step number.
///
/// After `n` moves X holds `(n + 1) / 2` squares and O holds `n / 2`,
/// so X always moved first and nobody moved twice in a row.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().iter().enumerate().all(|(n, mov)| {
            let board = mov.board();
            board.count(Player::X) == n.div_ceil(2) && board.count(Player::O) == n / 2
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
