//! Rejection reasons for setup and play.

use super::types::{PlayerId, Tile};

/// Why an operation was rejected.
///
/// Every variant means the game was left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Setup was called with the same identity twice.
    #[display("Players must be distinct")]
    InvalidPlayers,

    /// The game has already been won or tied.
    #[display("Game is already over")]
    GameOver,

    /// The caller is not the player whose turn it is.
    #[display("It's not {caller}'s turn, waiting for {expected}")]
    NotPlayersTurn {
        /// Player whose turn it is.
        expected: PlayerId,
        /// Player who attempted the move.
        caller: PlayerId,
    },

    /// Row or column lies outside the board.
    #[display("Tile {_0} is out of bounds")]
    OutOfBounds(#[error(not(source))] Tile),

    /// The target cell already holds a mark.
    #[display("Tile {_0} is already set")]
    TileOccupied(#[error(not(source))] Tile),

    /// A postcondition failed after a transition was computed.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(#[error(not(source))] String),
}
