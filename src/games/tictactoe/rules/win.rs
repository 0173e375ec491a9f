//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
///
/// When more than one line is complete (unreachable in legal play) the
/// first one in this order is reported.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first complete line on the board.
///
/// Returns the owning player and the line, or `None` if no line is
/// uniformly occupied.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some((player, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX......".parse().unwrap();
        assert_eq!(
            winning_line(&board),
            Some((Player::X, [Position::TopLeft, Position::TopCenter, Position::TopRight]))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "..O.O.O..".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Player::O, LINES[7])));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX.......".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX......".parse().unwrap();
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins_ties() {
        // Row 0 and column 0 both complete.
        let board: Board = "XXXX..X..".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Player::X, LINES[0])));

        // Column 2 (index 5) precedes the anti-diagonal (index 7).
        let board: Board = "..O.OOO.O".parse().unwrap();
        assert_eq!(winning_line(&board), Some((Player::O, LINES[5])));
    }
}
