//! Command-line interface for the tic-tac-toe engine.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tic-tac-toe - replay and inspect games against the strict rules engine
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Strict tic-tac-toe rules engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play every move of a TOML game script and print the final game
    Replay {
        /// Path to the game script
        script: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Stop at the first rejected move instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Set up a fresh game and print it
    Setup {
        /// Player who moves first
        player_a: String,

        /// Player who moves second
        player_b: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How to print a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Board drawing with a status line
    Text,
    /// Pretty-printed JSON snapshot
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let args = ["tictactoe", "replay", "game.toml", "--strict", "-f", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Replay {
                script,
                format,
                strict,
            } => {
                assert_eq!(script, PathBuf::from("game.toml"));
                assert_eq!(format, OutputFormat::Json);
                assert!(strict);
            }
            other => panic!("Unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_setup_defaults_to_text() {
        let cli = Cli::try_parse_from(["tictactoe", "setup", "alice", "bob"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Setup {
                format: OutputFormat::Text,
                ..
            }
        ));
    }
}
