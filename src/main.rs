//! nxn_tictactoe - terminal front end
//!
//! Plays N×N tic-tac-toe interactively or replays a list of moves.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use nxn_tictactoe::{GameConfig, MoveOrder, render, replay, run_session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.dimension, cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay {
            cells,
            jump,
            json,
            descending,
        } => run_replay(config, &cells, jump, json, descending),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config), fields(dimension = config.dimension()))]
fn run_play(config: &GameConfig) -> Result<()> {
    info!("Starting interactive game");
    let mut controller = config.controller()?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_session(&mut controller, stdin.lock(), &mut stdout)
}

/// Replay moves and print the resulting game
#[instrument(skip(config, cells), fields(moves = cells.len()))]
fn run_replay(
    config: GameConfig,
    cells: &[usize],
    jump: Option<usize>,
    json: bool,
    descending: bool,
) -> Result<()> {
    let config = if descending {
        config.with_move_order(MoveOrder::Descending)
    } else {
        config
    };
    let mut controller = config.controller()?;
    replay(&mut controller, cells);

    if let Some(step) = jump {
        controller
            .jump_to(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }

    if json {
        let snapshot = serde_json::to_string_pretty(&controller.snapshot())
            .context("Failed to serialize snapshot")?;
        println!("{}", snapshot);
    } else {
        print!("{}", render(controller.state()));
    }
    Ok(())
}
