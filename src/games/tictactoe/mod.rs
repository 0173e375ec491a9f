//! Tic-tac-toe with move history and time-travel.

mod action;
mod contracts;
mod event;
pub mod invariants;
mod kani_support;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use action::{Move, Play, Rejection};
pub use contracts::{Contract, ContractViolation, GameUndecided, PlayContract, SquareIsEmpty};
pub use event::GameEvent;
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, StepInRangeInvariant,
};
pub use position::Position;
pub use rules::{Verdict, evaluate};
pub use state::GameState;
pub use types::{Board, BoardParseError, Player, Square};
pub use view::{GameView, MoveEntry};
