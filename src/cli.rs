//! Command-line interface for nxn_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// N×N tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "nxn_tictactoe")]
#[command(about = "N×N tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board dimension N (overrides config file and environment)
    #[arg(short = 'n', long, global = true)]
    pub dimension: Option<usize>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a sequence of moves and print the resulting game
    Replay {
        /// Cell indices in play order
        cells: Vec<usize>,

        /// History step to show after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Print a JSON snapshot instead of the text view
        #[arg(long)]
        json: bool,

        /// List moves newest first
        #[arg(long)]
        descending: bool,
    },
}
