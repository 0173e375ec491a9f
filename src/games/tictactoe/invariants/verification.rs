//! Formal verification of board evaluation using the Kani model checker.
//!
//! These harnesses check `evaluate` over every board, not only the ones
//! reachable through play.

#[cfg(kani)]
mod proofs {
    use crate::games::tictactoe::rules::{evaluate, is_full, winning_line};
    use crate::games::tictactoe::{Board, Square, Verdict};

    /// `evaluate` terminates without panicking and reports a real line.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_evaluate_is_total() {
        let board: Board = kani::any();

        if let Verdict::Won { player, line } = evaluate(&board) {
            for pos in line {
                assert!(board.get(pos) == Square::Occupied(player));
            }
        }
    }

    /// A draw is only reported for a full board with no complete line.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_win_precedes_draw() {
        let board: Board = kani::any();

        if evaluate(&board) == Verdict::Draw {
            assert!(is_full(&board));
            assert!(winning_line(&board).is_none());
        }
    }
}
