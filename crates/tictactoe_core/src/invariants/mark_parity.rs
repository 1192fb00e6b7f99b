//! Mark parity invariant: odd moves place `O`, even moves place `X`.

use super::super::{Game, Mark, Square};
use super::Invariant;

/// Invariant: the mark on each played tile is the one for its move number.
///
/// Move `k` (1-indexed) placed `O` iff `k` is odd, so the board always holds
/// as many `O` as `X`, or one more.
pub struct MarkParityInvariant;

impl Invariant<Game> for MarkParityInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();

        let placed_by_parity = game.history().iter().zip(1u8..).all(|(mv, k)| {
            board.get(mv.tile) == Ok(Square::Occupied(Mark::for_turn(k)))
        });

        let o_count = board.count(Mark::O);
        let x_count = board.count(Mark::X);

        placed_by_parity && (o_count == x_count || o_count == x_count + 1)
    }

    fn description() -> &'static str {
        "Odd moves place O, even moves place X"
    }
}
