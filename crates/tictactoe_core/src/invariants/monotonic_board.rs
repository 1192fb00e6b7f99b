//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Game, Mark};
use super::Invariant;

/// Invariant: the board is exactly the replay of the move history.
///
/// Replaying each move onto an empty board must never land on an occupied
/// cell, and the result must match the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();

        for (mv, k) in game.history().iter().zip(1u8..) {
            if reconstructed.set(mv.tile, Mark::for_turn(k)).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
