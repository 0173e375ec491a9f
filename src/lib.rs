//! Tic-tac-toe with move history and time-travel.
//!
//! The crate is a small, pure game engine plus the view layers that drive
//! it. A view layer forwards user input as [`GameEvent`]s and redraws from
//! [`GameState::view`]; it never touches board rules itself.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] turns any board into a [`Verdict`]
//! - **State**: [`GameState`] owns the history and the current step
//! - **View**: [`GameView`] carries everything needed to draw a frame
//!
//! # Example
//!
//! ```
//! use timewarp_tictactoe::{GameState, Position, Verdict};
//!
//! let mut game = GameState::new();
//! for pos in [Position::TopLeft, Position::MiddleLeft, Position::TopCenter,
//!             Position::Center, Position::TopRight] {
//!     let _ = game.play(pos);
//! }
//! assert!(matches!(game.verdict(), Verdict::Won { .. }));
//! assert_eq!(game.status_text(), "Winner: X");
//!
//! game.jump_to(2);
//! assert_eq!(game.status_text(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, TuiConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, BoardParseError, Contract, ContractViolation, GameEvent,
    GameInvariants, GameState, GameUndecided, GameView, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, Move, MoveEntry, Play, PlayContract, Player, Position,
    Rejection, SquareIsEmpty, Square, StepInRangeInvariant, Verdict, evaluate,
};

/// Board rules as free functions.
pub mod rules {
    pub use crate::games::tictactoe::rules::{LINES, check_winner, evaluate, is_full, winning_line};
}
