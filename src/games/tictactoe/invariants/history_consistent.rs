//! History consistency invariant: each snapshot adds exactly one mark.

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly the played square.
///
/// Entry 0 is the empty board with no last move. For every later entry
/// `n`, the square at `last_move` was empty in entry `n - 1` and holds the
/// mover's mark in entry `n`; every other square is unchanged.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return false;
        };
        if first.last_move().is_some()
            || first.board().squares().iter().any(|s| *s != Square::Empty)
        {
            return false;
        }

        history.windows(2).enumerate().all(|(n, pair)| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let Some(pos) = pair[1].last_move() else {
                return false;
            };
            let mover = Player::for_step(n);

            before.get(pos) == Square::Empty
                && after.get(pos) == Square::Occupied(mover)
                && before
                    .squares()
                    .iter()
                    .zip(after.squares())
                    .enumerate()
                    .all(|(idx, (b, a))| idx == pos.to_index() || b == a)
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark for the player to move"
    }
}
