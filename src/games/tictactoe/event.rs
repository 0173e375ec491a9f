//! Inbound events from the view layer.

use super::state::GameState;
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// User intent reported by a view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A board square was clicked.
    CellClicked(Position),
    /// A move-list entry was chosen.
    HistoryStepSelected(usize),
    /// The move-order toggle was pressed.
    MoveOrderToggleRequested,
}

impl GameState {
    /// Dispatches one view-layer event to the matching operation.
    #[instrument(skip(self))]
    pub fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::CellClicked(position) => {
                let outcome = self.play(position);
                debug!(?outcome, "Cell clicked");
            }
            GameEvent::HistoryStepSelected(step) => self.jump_to(step),
            GameEvent::MoveOrderToggleRequested => self.toggle_move_order(),
        }
    }
}
