//! Game scripts: the players and the moves to feed the engine.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{Move, PlayerId, Tile};
use tracing::{debug, info, instrument};

/// A scripted game, loaded from TOML.
///
/// ```toml
/// players = ["alice", "bob"]
///
/// [[moves]]
/// player = "alice"
/// row = 1
/// column = 1
/// ```
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawGameScript")]
pub struct GameScript {
    /// Players in turn order; the first moves first.
    players: [PlayerId; 2],

    /// Moves to attempt, in order.
    moves: Vec<ScriptMove>,
}

/// Script as written, before the player count is checked.
#[derive(Deserialize)]
struct RawGameScript {
    players: Vec<PlayerId>,
    #[serde(default)]
    moves: Vec<ScriptMove>,
}

impl TryFrom<RawGameScript> for GameScript {
    type Error = ScriptError;

    fn try_from(raw: RawGameScript) -> Result<Self, Self::Error> {
        let count = raw.players.len();
        let players: [PlayerId; 2] = raw.players.try_into().map_err(|_| {
            ScriptError::new(format!("Script must name exactly two players, found {count}"))
        })?;
        Ok(Self::new(players, raw.moves))
    }
}

/// One scripted move.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct ScriptMove {
    /// Who plays.
    player: PlayerId,
    /// Target row.
    row: u8,
    /// Target column.
    column: u8,
}

impl ScriptMove {
    /// Creates a scripted move.
    pub fn new(player: impl Into<PlayerId>, row: u8, column: u8) -> Self {
        Self {
            player: player.into(),
            row,
            column,
        }
    }

    /// The target tile.
    pub fn tile(&self) -> Tile {
        Tile::new(self.row, self.column)
    }

    /// The move as the engine sees it.
    pub fn to_move(&self) -> Move {
        Move::new(self.player.clone(), self.tile())
    }
}

impl GameScript {
    /// Creates a script from players and moves.
    pub fn new(players: [PlayerId; 2], moves: Vec<ScriptMove>) -> Self {
        Self { players, moves }
    }

    /// Parses a script from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ScriptError> {
        let script: Self = toml::from_str(content)
            .map_err(|e| ScriptError::new(format!("Failed to parse script: {}", e)))?;
        debug!(moves = script.moves.len(), "Script parsed");
        Ok(script)
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        debug!("Loading script from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::new(format!("Failed to read script file: {}", e)))?;

        let script = Self::from_toml_str(&content)?;
        info!(
            player_a = %script.players[0],
            player_b = %script.players[1],
            moves = script.moves.len(),
            "Script loaded"
        );
        Ok(script)
    }
}

/// Script loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
