//! Turn counter invariant: the turn counter tracks accepted moves and slots
//! alternate, starting with player 0.

use super::super::Game;
use super::Invariant;

/// Invariant: the turn counter and move history agree.
///
/// While active, `turn == 1 + moves`. Once the game ends the completing
/// move does not advance the counter, so `turn == moves`. The k-th move
/// (0-indexed) was made by `players[k % 2]`.
pub struct TurnCounterInvariant;

impl Invariant<Game> for TurnCounterInvariant {
    fn holds(game: &Game) -> bool {
        let moves = game.history().len();
        let turn = usize::from(game.turn());

        let counter_ok = if game.is_active() {
            turn == moves + 1
        } else {
            moves > 0 && turn == moves
        };

        let alternates = game
            .history()
            .iter()
            .enumerate()
            .all(|(k, mv)| mv.player == game.players()[k % 2]);

        counter_ok && alternates
    }

    fn description() -> &'static str {
        "Turn counter matches accepted moves and players alternate"
    }
}
