//! Tests for game state, history and time-travel.

use timewarp_tictactoe::{
    GameEvent, GameInvariants, GameState, InvariantSet, Play, Player, Position, Rejection, Verdict,
    rules::LINES,
};

fn pos(idx: usize) -> Position {
    Position::from_index(idx).expect("index on board")
}

fn replay(cells: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &idx in cells {
        let _ = game.play(pos(idx));
    }
    game
}

#[test]
fn test_second_click_on_same_square_is_noop() {
    let mut game = GameState::new();
    assert!(game.play(Position::Center).is_placed());
    let before = game.clone();

    assert_eq!(
        game.play(Position::Center),
        Play::Ignored(Rejection::SquareOccupied(Position::Center))
    );
    assert_eq!(game, before);
}

#[test]
fn test_history_truncation_after_jump() {
    let mut game = replay(&[0, 1, 2]);
    assert_eq!(game.history().len(), 4);

    game.jump_to(1);
    assert!(game.play(pos(5)).is_placed());

    assert_eq!(game.history().len(), 3);
    assert_eq!(game.history()[2].last_move(), Some(pos(5)));
    assert!(game.history().iter().all(|m| m.last_move() != Some(pos(2))));
}

#[test]
fn test_turn_follows_step_parity() {
    let mut game = GameState::new();
    let script: &[GameEvent] = &[
        GameEvent::CellClicked(pos(4)),
        GameEvent::CellClicked(pos(0)),
        GameEvent::CellClicked(pos(4)),
        GameEvent::HistoryStepSelected(1),
        GameEvent::CellClicked(pos(8)),
        GameEvent::MoveOrderToggleRequested,
        GameEvent::CellClicked(pos(2)),
        GameEvent::HistoryStepSelected(0),
        GameEvent::HistoryStepSelected(3),
    ];

    for event in script {
        game.apply(*event);
        let expected = if game.step_number() % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(game.to_move(), expected, "after {:?}", event);
        assert!(GameInvariants::check_all(&game).is_ok(), "after {:?}", event);
    }
}

#[test]
fn test_center_move_label() {
    let game = replay(&[4]);
    assert_eq!(game.move_list()[1].label(), "Go to move #1: (2, 2)");
    assert_eq!(game.move_list()[0].label(), "Go to game start");
}

#[test]
fn test_win_scenario() {
    let mut game = replay(&[0, 3, 1, 4, 2]);

    assert_eq!(game.verdict(), Verdict::Won { player: Player::X, line: LINES[0] });
    assert_eq!(game.status_text(), "Winner: X");
    assert_eq!(game.highlighted_line(), vec![pos(0), pos(1), pos(2)]);

    let before = game.clone();
    assert_eq!(game.play(pos(8)), Play::Ignored(Rejection::GameDecided));
    assert_eq!(game, before);
}

#[test]
fn test_draw_scenario() {
    let game = replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.history().len(), 10);
    assert_eq!(game.verdict(), Verdict::Draw);
    assert_eq!(game.status_text(), "Winner: draw");
    assert!(game.highlighted_line().is_empty());
}

#[test]
fn test_o_can_win() {
    let game = replay(&[0, 2, 1, 4, 8, 6]);
    assert_eq!(game.verdict(), Verdict::Won { player: Player::O, line: LINES[7] });
    assert_eq!(game.status_text(), "Winner: O");
}

#[test]
fn test_descending_order_reverses_presentation_only() {
    let mut game = replay(&[4, 0, 8]);
    game.jump_to(1);
    game.toggle_move_order();

    let entries = game.move_list();
    let steps: Vec<usize> = entries.iter().map(|e| *e.step()).collect();
    assert_eq!(steps, vec![3, 2, 1, 0]);
    assert_eq!(entries[0].label(), "Go to move #3: (3, 3)");
    assert_eq!(entries[3].label(), "Go to game start");

    let current: Vec<usize> = entries
        .iter()
        .filter(|e| *e.is_current())
        .map(|e| *e.step())
        .collect();
    assert_eq!(current, vec![1]);

    // Canonical history stays oldest first.
    assert_eq!(game.history()[1].last_move(), Some(Position::Center));
}

#[test]
fn test_view_reports_everything_needed_to_draw() {
    let mut game = replay(&[0, 3, 1, 4, 2]);
    game.toggle_move_order();
    let view = game.view();

    assert_eq!(view.status(), "Winner: X");
    assert_eq!(view.toggle_label(), "Sort moves ascending");
    assert!(view.is_highlighted(Position::TopRight));
    assert!(!view.is_highlighted(Position::Center));
    assert_eq!(view.moves().len(), 6);
    assert!(*view.moves()[0].is_current());
}
