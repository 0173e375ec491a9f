//! Command-line interface for timewarp_tictactoe.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "timewarp_tictactoe")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Feed a sequence of cells through the game and print the result
    Replay {
        /// Cells to click, 0-8 in row-major order (e.g. 0,3,1,4,2)
        #[arg(
            short,
            long,
            value_delimiter = ',',
            value_parser = clap::value_parser!(u8).range(0..9)
        )]
        moves: Vec<u8>,

        /// Jump to this history step after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Show the move list newest first
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a single board such as "XOX.O.X.."
    Evaluate {
        /// Nine squares, row-major: X, O, or one of `. - _` and space for empty
        #[arg(short, long)]
        board: String,
    },
}
