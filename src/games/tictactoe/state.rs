//! Game state with time-travel over an append-only history.
//!
//! The state is a single owned struct mutated through `&mut self`
//! operations. Everything the view layer shows is derived on demand from
//! `history[step_number]`; nothing is cached.

use super::action::{Move, Play};
use super::contracts::{Contract, PlayContract};
use super::rules::{self, Verdict};
use super::view::{GameView, MoveEntry};
use super::{Board, Player, Position, Square};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// One game session: history, current step and move-list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Snapshots in play order. Entry 0 is the empty board.
    pub(super) history: Vec<Move>,
    /// Index of the snapshot currently shown.
    pub(super) step_number: usize,
    /// Presentation order for [`GameState::move_list`].
    pub(super) moves_ascending: bool,
}

impl GameState {
    /// Creates a new game at the empty starting position.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Move::start()],
            step_number: 0,
            moves_ascending: true,
        }
    }

    /// Places the mover's mark at `position`.
    ///
    /// Ignored, leaving the state untouched, when the shown board is already
    /// decided or the square is taken. Otherwise every entry after the
    /// current step is discarded before the new snapshot is appended.
    #[instrument(skip(self), fields(step = self.step_number, player = %self.to_move()))]
    pub fn play(&mut self, position: Position) -> Play {
        if let Err(rejection) = PlayContract::pre(self, &position) {
            debug!(%rejection, "Play ignored");
            return Play::Ignored(rejection);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.to_move();
        let mut board = *self.current_board();
        board.set(position, Square::Occupied(player));

        let discarded = self.history.len() - (self.step_number + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future history");
        }
        self.history.truncate(self.step_number + 1);
        self.history.push(Move::new(board, position));
        self.step_number += 1;

        #[cfg(debug_assertions)]
        {
            if let Err(violation) = PlayContract::post(&before, self) {
                panic!("{}", violation);
            }
        }

        debug!(step = self.step_number, "Move placed");
        Play::Placed { player, position }
    }

    /// Shows the snapshot at `step` without touching history.
    ///
    /// `step` must index an existing entry. Debug builds assert this;
    /// release builds log and ignore out-of-range steps.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) {
        debug_assert!(
            step < self.history.len(),
            "jump_to({}) with {} history entries",
            step,
            self.history.len()
        );
        if step >= self.history.len() {
            warn!(step, "Ignoring jump past end of history");
            return;
        }
        self.step_number = step;
    }

    /// Flips the move-list presentation order.
    #[instrument(skip(self), fields(ascending = self.moves_ascending))]
    pub fn toggle_move_order(&mut self) {
        self.moves_ascending = !self.moves_ascending;
    }

    /// Returns the full history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the index of the shown snapshot.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Returns true if the move list is presented oldest first.
    pub fn moves_ascending(&self) -> bool {
        self.moves_ascending
    }

    /// Returns whose turn it is at the shown step.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step_number)
    }

    /// Returns the board at the shown step.
    pub fn current_board(&self) -> &Board {
        self.history[self.step_number].board()
    }

    /// Evaluates the board at the shown step.
    pub fn verdict(&self) -> Verdict {
        rules::evaluate(self.current_board())
    }

    /// Status line: the winner, a draw, or who moves next.
    pub fn status_text(&self) -> String {
        match self.verdict() {
            Verdict::Won { player, .. } => format!("Winner: {}", player),
            Verdict::Draw => "Winner: draw".to_string(),
            Verdict::InProgress => format!("Next player: {}", self.to_move()),
        }
    }

    /// The winning line to highlight, or empty.
    pub fn highlighted_line(&self) -> Vec<Position> {
        self.verdict().line().map(Vec::from).unwrap_or_default()
    }

    /// Label for the move-order toggle, naming the order it switches to.
    pub fn toggle_label(&self) -> &'static str {
        if self.moves_ascending {
            "Sort moves descending"
        } else {
            "Sort moves ascending"
        }
    }

    /// One entry per history snapshot, in presentation order.
    #[instrument(skip(self), fields(ascending = self.moves_ascending))]
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, mov)| MoveEntry::new(mov.label(step), step, step == self.step_number))
            .collect();

        if !self.moves_ascending {
            entries.reverse();
        }
        entries
    }

    /// Everything the view layer needs to draw one frame.
    pub fn view(&self) -> GameView {
        GameView::from(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Rejection;

    fn played(cells: &[usize]) -> GameState {
        let mut game = GameState::new();
        for idx in cells {
            let pos = Position::from_index(*idx).unwrap();
            assert!(game.play(pos).is_placed(), "cell {} should be playable", idx);
        }
        game
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step_number(), 0);
        assert_eq!(game.to_move(), Player::X);
        assert!(game.moves_ascending());
        assert_eq!(game.status_text(), "Next player: X");
        assert!(game.highlighted_line().is_empty());
    }

    #[test]
    fn test_play_occupied_square_is_ignored() {
        let mut game = played(&[4]);
        let before = game.clone();

        assert_eq!(
            game.play(Position::Center),
            Play::Ignored(Rejection::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_after_win_is_ignored() {
        let mut game = played(&[0, 3, 1, 4, 2]);
        let before = game.clone();

        assert_eq!(game.play(Position::BottomRight), Play::Ignored(Rejection::GameDecided));
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_truncates_future() {
        let mut game = played(&[0, 1, 2]);
        game.jump_to(1);
        assert!(game.play(Position::MiddleRight).is_placed());

        assert_eq!(game.history().len(), 3);
        assert_eq!(game.step_number(), 2);
        assert_eq!(game.history()[2].last_move(), Some(Position::MiddleRight));
        assert!(game.current_board().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut game = played(&[0, 1, 2]);
        game.jump_to(0);
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.to_move(), Player::X);
        game.jump_to(3);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_jump_back_from_finished_game_reopens_play() {
        let mut game = played(&[0, 3, 1, 4, 2]);
        game.jump_to(4);
        assert_eq!(game.status_text(), "Next player: X");
        assert!(game.play(Position::BottomRight).is_placed());
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "jump_to(5)")]
    fn test_jump_out_of_range_asserts_in_debug() {
        let mut game = played(&[0]);
        game.jump_to(5);
    }

    #[test]
    fn test_toggle_move_order_only_changes_presentation() {
        let mut game = played(&[4, 0]);
        let history = game.history().to_vec();

        game.toggle_move_order();
        assert!(!game.moves_ascending());
        assert_eq!(game.toggle_label(), "Sort moves ascending");
        assert_eq!(game.history(), history.as_slice());

        game.toggle_move_order();
        assert_eq!(game.toggle_label(), "Sort moves descending");
    }
}
