//! First-class move records.
//!
//! An accepted play is kept as a [`Move`] in the game's history so the
//! board can be replayed and checked against it.

use super::types::{PlayerId, Tile};
use serde::{Deserialize, Serialize};

/// A player placing the turn's mark on a tile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{player} -> {tile}")]
pub struct Move {
    /// The player making the move.
    pub player: PlayerId,
    /// Where the mark goes.
    pub tile: Tile,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: impl Into<PlayerId>, tile: Tile) -> Self {
        Self {
            player: player.into(),
            tile,
        }
    }
}
