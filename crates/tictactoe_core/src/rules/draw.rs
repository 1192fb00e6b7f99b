//! Tie detection.

use super::super::board::Board;
use super::win::check_winner;

/// Checks if every cell holds a mark.
pub fn is_full(board: &Board) -> bool {
    board.squares().all(|s| !s.is_empty())
}

/// A full board with no completed line.
///
/// A board that is both full and winning is a win, never a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Tile};

    fn fill(layout: [[Mark; 3]; 3]) -> Board {
        let mut board = Board::new();
        for (row, marks) in layout.iter().enumerate() {
            for (column, mark) in marks.iter().enumerate() {
                board
                    .set(Tile::new(row as u8, column as u8), *mark)
                    .unwrap();
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Tile::new(1, 1), Mark::X).unwrap();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Mark::{O, X};
        // x o o / o o x / x x o
        let board = fill([[X, O, O], [O, O, X], [X, X, O]]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_winning_board_is_not_draw() {
        use Mark::{O, X};
        // o x o / o x x / o o x
        let board = fill([[O, X, O], [O, X, X], [O, O, X]]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
