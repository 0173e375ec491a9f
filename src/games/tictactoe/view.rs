//! Read-only data handed to the view layer.
//!
//! A [`GameView`] is everything needed to draw one frame. It is rebuilt
//! from [`GameState`] after every event and can be serialized for
//! non-interactive output.

use super::state::GameState;
use super::{Player, Position, Square};
use derive_getters::Getters;
use serde::Serialize;

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveEntry {
    /// Button text, e.g. `Go to move #1: (2, 2)`.
    label: String,
    /// History index this entry jumps to.
    step: usize,
    /// True for the entry currently shown.
    is_current: bool,
}

impl MoveEntry {
    /// Creates a move-list entry.
    pub fn new(label: String, step: usize, is_current: bool) -> Self {
        Self {
            label,
            step,
            is_current,
        }
    }
}

/// Snapshot of everything the view layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameView {
    /// Squares of the shown board, row-major.
    squares: [Square; 9],
    /// Winning line to highlight; empty unless the board is won.
    highlighted: Vec<Position>,
    /// Status line.
    status: String,
    /// Player to move at the shown step.
    to_move: Player,
    /// Move list in presentation order.
    moves: Vec<MoveEntry>,
    /// Label of the move-order toggle.
    toggle_label: String,
}

impl GameView {
    /// Returns true if `pos` is part of the highlighted line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlighted.contains(&pos)
    }

    /// Plain-text rendering for terminals without the interactive UI.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                let symbol = self.squares[idx].symbol();
                let marked = Position::from_index(idx).is_some_and(|p| self.is_highlighted(p));
                if marked {
                    out.push_str(&format!("[{}]", symbol));
                } else {
                    out.push_str(&format!(" {} ", symbol));
                }
            }
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.status);
        out.push_str("\n\n");
        out.push_str(&format!("({})\n", self.toggle_label));
        for entry in &self.moves {
            let marker = if entry.is_current { '>' } else { ' ' };
            out.push_str(&format!("{} {:>2}. {}\n", marker, entry.step, entry.label));
        }
        out
    }
}

impl From<&GameState> for GameView {
    fn from(game: &GameState) -> Self {
        Self {
            squares: *game.current_board().squares(),
            highlighted: game.highlighted_line(),
            status: game.status_text(),
            to_move: game.to_move(),
            moves: game.move_list(),
            toggle_label: game.toggle_label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_of_new_game() {
        let view = GameState::new().view();
        assert_eq!(view.status(), "Next player: X");
        assert_eq!(view.moves().len(), 1);
        assert!(*view.moves()[0].is_current());
        assert_eq!(view.toggle_label(), "Sort moves descending");
        assert!(view.highlighted().is_empty());
    }

    #[test]
    fn test_render_text_marks_winning_line_and_current_step() {
        let mut game = GameState::new();
        for idx in [0, 3, 1, 4, 2] {
            let _ = game.play(Position::from_index(idx).unwrap());
        }
        let text = game.view().render_text();

        assert!(text.starts_with("[X][X][X]\n O  O  . \n"));
        assert!(text.contains("Winner: X"));
        assert!(text.contains(">  5. Go to move #5: (3, 1)"));
    }

    #[test]
    fn test_view_serializes_to_json() {
        let mut game = GameState::new();
        let _ = game.play(Position::Center);
        let json = serde_json::to_value(game.view()).unwrap();

        assert_eq!(json["status"], "Next player: O");
        assert_eq!(json["to_move"], "O");
        assert_eq!(json["moves"][1]["label"], "Go to move #1: (2, 2)");
        assert_eq!(json["moves"][1]["is_current"], true);
        assert_eq!(json["squares"][4]["Occupied"], "X");
    }
}
