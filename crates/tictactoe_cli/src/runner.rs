//! Drives a [`Game`] through a [`GameScript`].

use super::script::GameScript;
use tictactoe_core::{Game, GameError, GameSnapshot, Move};
use tracing::{debug, info, instrument, warn};

/// A scripted move the engine turned down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Position of the move in the script, 0-indexed.
    pub index: usize,
    /// The move as attempted.
    pub action: Move,
    /// Why it was rejected.
    pub error: GameError,
}

/// Outcome of running a script.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    /// The game after every accepted move.
    pub game: Game,
    /// Moves that were skipped, in script order.
    pub rejected: Vec<Rejection>,
}

impl ReplayReport {
    /// Snapshot of the final game.
    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }
}

/// Sets up the scripted game and plays every move.
///
/// Rejected moves are logged and skipped. With `strict`, the first
/// rejection is returned instead.
///
/// # Errors
///
/// [`GameError::InvalidPlayers`] if the script names the same player twice;
/// in strict mode, the first move rejection.
#[instrument(skip(script), fields(moves = script.moves().len()))]
pub fn run_script(script: &GameScript, strict: bool) -> Result<ReplayReport, GameError> {
    let [player_a, player_b] = script.players();
    let mut game = Game::setup(player_a.clone(), player_b.clone())?;
    let mut rejected = Vec::new();

    for (index, scripted) in script.moves().iter().enumerate() {
        let action = scripted.to_move();
        match game.play(&action.player, action.tile) {
            Ok(()) => debug!(index, %action, state = %game.state(), "Move accepted"),
            Err(error) if strict => {
                warn!(index, %action, %error, "Aborting script");
                return Err(error);
            }
            Err(error) => {
                warn!(index, %action, %error, "Skipping rejected move");
                rejected.push(Rejection {
                    index,
                    action,
                    error,
                });
            }
        }
    }

    info!(
        turn = game.turn(),
        state = %game.state(),
        rejected = rejected.len(),
        "Script finished"
    );
    Ok(ReplayReport { game, rejected })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ScriptMove;
    use tictactoe_core::{GameState, PlayerId, Tile};

    fn script(moves: Vec<ScriptMove>) -> GameScript {
        GameScript::new([PlayerId::new("alice"), PlayerId::new("bob")], moves)
    }

    #[test]
    fn test_runs_all_moves() {
        let report = run_script(
            &script(vec![
                ScriptMove::new("alice", 0, 0),
                ScriptMove::new("bob", 1, 1),
            ]),
            false,
        )
        .unwrap();
        assert_eq!(report.game.turn(), 3);
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn test_lenient_mode_skips_rejections() {
        let report = run_script(
            &script(vec![
                ScriptMove::new("alice", 0, 0),
                ScriptMove::new("bob", 0, 0),
                ScriptMove::new("bob", 1, 1),
            ]),
            false,
        )
        .unwrap();

        assert_eq!(report.game.turn(), 3);
        assert_eq!(
            report.rejected,
            vec![Rejection {
                index: 1,
                action: Move::new("bob", Tile::new(0, 0)),
                error: GameError::TileOccupied(Tile::new(0, 0)),
            }]
        );
    }

    #[test]
    fn test_strict_mode_aborts() {
        let result = run_script(
            &script(vec![
                ScriptMove::new("bob", 0, 0),
                ScriptMove::new("alice", 0, 0),
            ]),
            true,
        );
        assert!(matches!(result, Err(GameError::NotPlayersTurn { .. })));
    }

    #[test]
    fn test_identical_players_rejected() {
        let script = GameScript::new([PlayerId::new("alice"), PlayerId::new("alice")], vec![]);
        assert!(matches!(
            run_script(&script, false),
            Err(GameError::InvalidPlayers)
        ));
    }

    #[test]
    fn test_moves_after_win_are_game_over() {
        let report = run_script(
            &script(vec![
                ScriptMove::new("alice", 0, 0),
                ScriptMove::new("bob", 1, 0),
                ScriptMove::new("alice", 0, 1),
                ScriptMove::new("bob", 1, 1),
                ScriptMove::new("alice", 0, 2),
                ScriptMove::new("bob", 1, 2),
            ]),
            false,
        )
        .unwrap();

        assert_eq!(
            report.game.state(),
            &GameState::Won {
                winner: PlayerId::new("alice")
            }
        );
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].error, GameError::GameOver);
    }
}
