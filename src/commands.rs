//! Non-interactive subcommands.
//!
//! Each runner returns the text to print so `main` owns stdout.

use anyhow::{Context, Result};
use timewarp_tictactoe::{Board, GameEvent, GameState, Position, evaluate};
use tracing::{debug, info, instrument};

/// Feeds cells through a fresh game and renders the resulting view.
#[instrument]
pub fn replay(moves: &[u8], jump: Option<usize>, descending: bool, json: bool) -> Result<String> {
    let mut game = GameState::new();

    for &idx in moves {
        let pos = Position::from_index(usize::from(idx))
            .with_context(|| format!("Cell {} is outside the board", idx))?;
        let outcome = game.play(pos);
        debug!(cell = idx, ?outcome, "Replayed cell");
    }

    if let Some(step) = jump {
        anyhow::ensure!(
            step < game.history().len(),
            "Cannot jump to step {}: history has {} entries",
            step,
            game.history().len()
        );
        game.apply(GameEvent::HistoryStepSelected(step));
    }
    if descending {
        game.apply(GameEvent::MoveOrderToggleRequested);
    }

    info!(steps = game.history().len(), verdict = %game.verdict(), "Replay finished");

    let view = game.view();
    if json {
        Ok(serde_json::to_string_pretty(&view)? + "\n")
    } else {
        Ok(view.render_text())
    }
}

/// Parses a single board and renders it with its verdict.
#[instrument]
pub fn evaluate_board(board: &str) -> Result<String> {
    let board: Board = board.parse()?;
    let verdict = evaluate(&board);

    Ok(format!("{}\n\n{}\n", board.display(), verdict))
}
