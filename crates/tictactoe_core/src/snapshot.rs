//! Serializable read-only view of a game.

use super::board::Board;
use super::game::Game;
use super::state::GameState;
use super::types::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What an outside caller may read about a game.
///
/// Serializes as
/// `{"players":[..],"turn":n,"state":..,"board":[[null|"o"|"x"; 3]; 3]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Players in turn order.
    pub players: [PlayerId; 2],
    /// Number of the move about to be played, or of the final move.
    pub turn: u8,
    /// Game phase.
    pub state: GameState,
    /// Board contents, row-major.
    pub board: Board,
}

impl GameSnapshot {
    /// Compact JSON rendering.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Indented JSON rendering.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self {
            players: game.players().clone(),
            turn: game.turn(),
            state: game.state().clone(),
            board: game.board().clone(),
        }
    }
}

impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = &self.players;
        writeln!(f, "{first} (o) vs {second} (x), turn {}", self.turn)?;
        writeln!(f, "{}", self.board)?;
        match &self.state {
            GameState::Active => {
                let to_move = &self.players[usize::from(self.turn.saturating_sub(1) % 2)];
                let open = self.board.empty_tiles().len();
                write!(f, "{}, {open} tiles open. {to_move} to move.", self.state)
            }
            state => write!(f, "{state}"),
        }
    }
}
