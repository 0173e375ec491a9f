//! Timewarp Tic-Tac-Toe - unified CLI
//!
//! Interactive terminal game plus non-interactive replay and evaluation.

#![warn(missing_docs)]

mod cli;
mod commands;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use timewarp_tictactoe::TuiConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play { config: None }) {
        Command::Play { config } => {
            let config = TuiConfig::load(config.as_deref()).context("Failed to load config")?;
            tui::run_tui(config)
        }
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => {
            init_stderr_logging();
            print!("{}", commands::replay(&moves, jump, descending, json)?);
            Ok(())
        }
        Command::Evaluate { board } => {
            init_stderr_logging();
            print!("{}", commands::evaluate_board(&board)?);
            Ok(())
        }
    }
}

/// Log to stderr so stdout stays clean for piping.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
