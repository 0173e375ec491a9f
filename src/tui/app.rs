//! Application state and key dispatch.
//!
//! The app owns the [`GameState`] and translates keys into
//! [`GameEvent`]s. It holds no game rules of its own.

use super::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use timewarp_tictactoe::{GameEvent, GameState, GameView, Position};
use tracing::{debug, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    /// Row of the move list under the selection, in presentation order.
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Builds the view for the next frame.
    pub fn view(&self) -> GameView {
        self.game().view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected move-list row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            KeyCode::Char('s') => self.dispatch(GameEvent::MoveOrderToggleRequested),
            code => match (digit_position(code), self.focus) {
                (Some(pos), _) => {
                    self.cursor = pos;
                    self.dispatch(GameEvent::CellClicked(pos));
                }
                (None, Focus::Board) => self.handle_board_key(code),
                (None, Focus::History) => self.handle_history_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch(GameEvent::CellClicked(self.cursor));
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let rows = self.game.history().len();
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(rows - 1),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = rows - 1,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(entry) = self.game.move_list().get(self.selected) {
                    let step = *entry.step();
                    self.dispatch(GameEvent::HistoryStepSelected(step));
                }
            }
            _ => {}
        }
    }

    /// Forwards an event to the game and re-anchors the selection on the
    /// current step.
    fn dispatch(&mut self, event: GameEvent) {
        self.game.apply(event);
        self.selected = self
            .game
            .move_list()
            .iter()
            .position(|entry| *entry.is_current())
            .unwrap_or(0);
        debug!(step = self.game.step_number(), selected = self.selected, "Event applied");
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
