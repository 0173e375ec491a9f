//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here looks at history or
//! whose turn it is, so every function is total over all 3^9 boards,
//! including ones that legal play never produces.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// No complete line and at least one empty square.
    InProgress,
    /// A player holds a complete line.
    Won {
        /// Owner of the line.
        player: Player,
        /// The first complete line in check order.
        line: [Position; 3],
    },
    /// Board is full with no complete line.
    Draw,
}

impl Verdict {
    /// Returns true once the board is won or drawn.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Verdict::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            Verdict::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::InProgress => write!(f, "In progress"),
            Verdict::Won { player, line } => {
                let [a, b, c] = line.map(Position::to_index);
                write!(f, "{} wins on [{}, {}, {}]", player, a, b, c)
            }
            Verdict::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board.
///
/// The win check runs first, so a full board that also contains a line is
/// reported as a win rather than a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Verdict {
    if let Some((player, line)) = winning_line(board) {
        return Verdict::Won { player, line };
    }

    if is_full(board) {
        Verdict::Draw
    } else {
        Verdict::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Verdict::InProgress);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let board: Board = "XXXOOXXOO".parse().unwrap();
        assert_eq!(
            evaluate(&board),
            Verdict::Won { player: Player::X, line: LINES[0] }
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(evaluate(&board), Verdict::Draw);
        assert!(evaluate(&board).is_decided());
        assert_eq!(evaluate(&board).winner(), None);
    }

    #[test]
    fn test_evaluate_is_total() {
        // Walk every assignment of {Empty, X, O} to the nine squares.
        let mut counts = [0usize; 3];
        for code in 0..3usize.pow(9) {
            let mut n = code;
            let squares = std::array::from_fn(|_| {
                let sq = match n % 3 {
                    0 => Square::Empty,
                    1 => Square::Occupied(Player::X),
                    _ => Square::Occupied(Player::O),
                };
                n /= 3;
                sq
            });
            let board = Board::from_squares(squares);
            match evaluate(&board) {
                Verdict::InProgress => counts[0] += 1,
                Verdict::Won { player, line } => {
                    assert!(line.iter().all(|p| board.get(*p) == Square::Occupied(player)));
                    counts[1] += 1;
                }
                Verdict::Draw => {
                    assert!(is_full(&board));
                    counts[2] += 1;
                }
            }
        }
        assert_eq!(counts.iter().sum::<usize>(), 19_683);
        assert!(counts.iter().all(|c| *c > 0));
    }
}
