//! Tests for board evaluation.

use timewarp_tictactoe::{Board, Player, Verdict, evaluate, rules::LINES};

fn board_with_line(line: [timewarp_tictactoe::Position; 3], player: Player) -> Board {
    let mut board = Board::new();
    for pos in line {
        board.set(pos, timewarp_tictactoe::Square::Occupied(player));
    }
    board
}

#[test]
fn test_every_line_is_detected_for_both_players() {
    for line in LINES {
        for player in [Player::X, Player::O] {
            let board = board_with_line(line, player);
            assert_eq!(evaluate(&board), Verdict::Won { player, line });
        }
    }
}

#[test]
fn test_partial_board_without_line_is_in_progress() {
    let board: Board = "XO.OX....".parse().unwrap();
    assert_eq!(evaluate(&board), Verdict::InProgress);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOXXOOOXX".parse().unwrap();
    assert_eq!(evaluate(&board), Verdict::Draw);
}

#[test]
fn test_win_takes_precedence_over_full_board() {
    // Full board, X holds the main diagonal.
    let board: Board = "XOOOXXOXX".parse().unwrap();
    assert_eq!(evaluate(&board), Verdict::Won { player: Player::X, line: LINES[6] });
}

#[test]
fn test_unreachable_double_win_reports_first_line() {
    // X on the top row and O on the bottom row.
    let board: Board = "XXX...OOO".parse().unwrap();
    assert_eq!(evaluate(&board), Verdict::Won { player: Player::X, line: LINES[0] });
}

#[test]
fn test_evaluate_does_not_mutate() {
    let board: Board = "XXO.O....".parse().unwrap();
    let copy = board;
    let _ = evaluate(&board);
    assert_eq!(board, copy);
}
