//! Win detection.

use super::super::board::Board;
use super::super::types::{Mark, Square};

/// The eight lines as `(row, column)` triples, in scan order:
/// rows top to bottom, columns left to right, then both diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the mark of the first line fully owned by one mark.
pub fn check_winner(board: &Board) -> Option<Mark> {
    let rows = board.rows();
    LINES.iter().find_map(|[a, b, c]| {
        let sq = rows[a.0][a.1];
        match sq {
            Square::Occupied(mark) if sq == rows[b.0][b.1] && sq == rows[c.0][c.1] => Some(mark),
            _ => None,
        }
    })
}
