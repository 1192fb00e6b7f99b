//! The 3x3 grid.

use super::error::GameError;
use super::rules;
use super::types::{Mark, Square, Tile};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// 3x3 tic-tac-toe board, row-major.
///
/// Cells only ever move from [`Square::Empty`] to [`Square::Occupied`];
/// [`Board::set`] refuses to overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    rows: [[Square; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the content of a cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if row or column is not in `0..=2`.
    pub fn get(&self, tile: Tile) -> Result<Square, GameError> {
        if !tile.in_bounds() {
            return Err(GameError::OutOfBounds(tile));
        }
        Ok(self.rows[tile.row as usize][tile.column as usize])
    }

    /// Places a mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for bad coordinates and
    /// [`GameError::TileOccupied`] if the cell already holds a mark.
    /// The board is unchanged on error.
    #[instrument(skip(self))]
    pub fn set(&mut self, tile: Tile, mark: Mark) -> Result<(), GameError> {
        if !self.get(tile)?.is_empty() {
            return Err(GameError::TileOccupied(tile));
        }
        self.rows[tile.row as usize][tile.column as usize] = Square::Occupied(mark);
        Ok(())
    }

    /// True if the cell is on the board and empty.
    pub fn is_empty(&self, tile: Tile) -> bool {
        matches!(self.get(tile), Ok(Square::Empty))
    }

    /// True if no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the mark owning the first complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Square; SIZE]; SIZE] {
        &self.rows
    }

    /// Iterates over every cell in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Returns the empty cells in row-major order.
    pub fn empty_tiles(&self) -> Vec<Tile> {
        all_tiles().filter(|tile| self.is_empty(*tile)).collect()
    }

    /// Counts the cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares()
            .filter(|square| *square == Square::Occupied(mark))
            .count()
    }
}

/// Every tile on the board in row-major order.
pub fn all_tiles() -> impl Iterator<Item = Tile> {
    (0..SIZE as u8).flat_map(|row| (0..SIZE as u8).map(move |column| Tile::new(row, column)))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows.iter().enumerate() {
            for (c, square) in row.iter().enumerate() {
                match square {
                    Square::Empty => write!(f, ".")?,
                    Square::Occupied(mark) => write!(f, "{mark}")?,
                }
                if c < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if r < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
