//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A mark placed on the board.
///
/// The mark is chosen by turn parity, never by player slot: whoever plays
/// an odd turn places `O`, whoever plays an even turn places `X`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// Placed on odd turns (the first move).
    #[strum(serialize = "o")]
    O,
    /// Placed on even turns.
    #[strum(serialize = "x")]
    X,
}

impl Mark {
    /// Returns the mark placed on the given 1-indexed turn.
    pub fn for_turn(turn: u8) -> Self {
        if turn % 2 == 1 { Mark::O } else { Mark::X }
    }
}

/// Content of a single cell.
///
/// Serializes as `null` when empty so a board renders as a grid of
/// `null | "o" | "x"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Mark>", into = "Option<Mark>")]
pub enum Square {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// True if nothing has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

impl From<Option<Mark>> for Square {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Square::Empty, Square::Occupied)
    }
}

impl From<Square> for Option<Mark> {
    fn from(square: Square) -> Self {
        square.mark()
    }
}

/// A requested board coordinate.
///
/// Any `u8` pair is representable; [`Board`](crate::Board) rejects values
/// outside `0..=2` with [`GameError::OutOfBounds`](crate::GameError::OutOfBounds).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {column})")]
pub struct Tile {
    /// Row, top to bottom.
    pub row: u8,
    /// Column, left to right.
    pub column: u8,
}

impl Tile {
    /// Creates a tile coordinate.
    pub fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// True if both coordinates lie on a 3x3 board.
    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.column < 3
    }
}

/// Opaque player identity, compared by equality only.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Creates a player identity.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_follows_turn_parity() {
        assert_eq!(Mark::for_turn(1), Mark::O);
        assert_eq!(Mark::for_turn(2), Mark::X);
        assert_eq!(Mark::for_turn(9), Mark::O);
    }

    #[test]
    fn test_square_serializes_as_nullable_mark() {
        assert_eq!(serde_json::to_string(&Square::Empty).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&Square::Occupied(Mark::X)).unwrap(),
            "\"x\""
        );
        let square: Square = serde_json::from_str("\"o\"").unwrap();
        assert_eq!(square, Square::Occupied(Mark::O));
    }

    #[test]
    fn test_tile_bounds() {
        assert!(Tile::new(2, 2).in_bounds());
        assert!(!Tile::new(3, 0).in_bounds());
        assert!(!Tile::new(0, 3).in_bounds());
    }
}
