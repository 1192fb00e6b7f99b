//! Game phase.

use super::types::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of a game.
///
/// `Tied` and `Won` are terminal: once reached, the game accepts no more
/// moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    /// Moves are being accepted.
    Active,
    /// Board filled with no completed line.
    Tied,
    /// A player completed a line.
    Won {
        /// The player whose move completed the line.
        winner: PlayerId,
    },
}

impl GameState {
    /// True while moves are accepted.
    pub fn is_active(&self) -> bool {
        matches!(self, GameState::Active)
    }

    /// True once the game is won or tied.
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<&PlayerId> {
        match self {
            GameState::Won { winner } => Some(winner),
            GameState::Active | GameState::Tied => None,
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Active => write!(f, "In progress"),
            GameState::Tied => write!(f, "Game over. Tie!"),
            GameState::Won { winner } => write!(f, "Game over. {winner} wins!"),
        }
    }
}
