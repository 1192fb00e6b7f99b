//! Command-line driver for the tic-tac-toe rules engine.
//!
//! Loads a TOML game script, feeds each move to
//! [`tictactoe_core::Game::play`], and prints the resulting game.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod output;
mod runner;
mod script;

pub use output::render;
pub use runner::{Rejection, ReplayReport, run_script};
pub use script::{GameScript, ScriptError, ScriptMove};
