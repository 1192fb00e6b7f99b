//! Tic-tac-toe - unified CLI
//!
//! Replays game scripts against the strict rules engine.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tictactoe_cli::cli::{Cli, Command, OutputFormat};
use tictactoe_cli::{GameScript, render, run_script};
use tictactoe_core::Game;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay {
            script,
            format,
            strict,
        } => replay(&script, format, strict),
        Command::Setup {
            player_a,
            player_b,
            format,
        } => setup(player_a, player_b, format),
    }
}

/// Replays a script file and prints the final game.
#[instrument]
fn replay(path: &Path, format: OutputFormat, strict: bool) -> Result<()> {
    let script = GameScript::from_file(path)?;
    let report = run_script(&script, strict)
        .with_context(|| format!("Replay of {} failed", path.display()))?;

    for rejection in &report.rejected {
        warn!(
            index = rejection.index,
            action = %rejection.action,
            error = %rejection.error,
            "Move was skipped"
        );
    }

    println!("{}", render(&report.snapshot(), format)?);
    info!(skipped = report.rejected.len(), "Replay complete");
    Ok(())
}

/// Prints a freshly set-up game.
#[instrument]
fn setup(player_a: String, player_b: String, format: OutputFormat) -> Result<()> {
    let game = Game::setup(player_a, player_b).context("Setup failed")?;
    println!("{}", render(&game.snapshot(), format)?);
    Ok(())
}
