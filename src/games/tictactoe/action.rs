//! History entries and play outcomes.
//!
//! A [`Move`] is a snapshot: the whole board after the move plus the
//! square that changed. Jumping back in time is then just picking an
//! entry, with no replay needed.

use super::{Board, Player, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An immutable history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Board after this move.
    board: Board,
    /// Square changed by this move; `None` for the starting position.
    last_move: Option<Position>,
}

impl Move {
    /// The empty starting position.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Creates a snapshot after `position` was played.
    #[instrument(skip(board))]
    pub fn new(board: Board, position: Position) -> Self {
        Self {
            board,
            last_move: Some(position),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the square changed by this move.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Menu label for jumping to this entry, given its step number.
    pub fn label(&self, step: usize) -> String {
        match self.last_move {
            Some(pos) if step > 0 => {
                let (col, row) = pos.coordinates();
                format!("Go to move #{}: ({}, {})", step, col, row)
            }
            _ => "Go to game start".to_string(),
        }
    }
}

/// Why a play was ignored.
///
/// Ignored plays are part of normal interaction (clicking a taken square,
/// clicking after the game ended) and leave the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Rejection {
    /// The current board is already won or drawn.
    #[display("Game is already over")]
    GameDecided,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

/// Result of [`GameState::play`](super::GameState::play).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Play {
    /// A mark was placed and a history entry appended.
    Placed {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
    },
    /// Nothing changed.
    Ignored(Rejection),
}

impl Play {
    /// Returns true if the play changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, Play::Placed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_label() {
        assert_eq!(Move::start().label(0), "Go to game start");
    }

    #[test]
    fn test_move_label_is_column_then_row() {
        let mov = Move::new(Board::new(), Position::MiddleRight);
        assert_eq!(mov.label(3), "Go to move #3: (3, 2)");
    }

    #[test]
    fn test_rejection_display() {
        assert_eq!(
            Rejection::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
    }
}
