//! Contract-based validation for the play transition.
//!
//! Contracts define correctness through preconditions and postconditions,
//! Hoare style: `{P} play {Q}`.

use super::action::Move;
use super::error::GameError;
use super::invariants::{GameInvariants, InvariantSet};
use super::Game;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions on the state the action produced.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Play Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not been won or tied.
pub struct GameIsActive;

impl GameIsActive {
    /// Fails with [`GameError::GameOver`] once the game has ended.
    pub fn check(game: &Game) -> Result<(), GameError> {
        if game.is_active() {
            Ok(())
        } else {
            Err(GameError::GameOver)
        }
    }
}

/// Precondition: the mover is the player whose turn it is.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`GameError::NotPlayersTurn`] for any other identity.
    pub fn check(mv: &Move, game: &Game) -> Result<(), GameError> {
        let expected = game.current_player();
        if mv.player != *expected {
            Err(GameError::NotPlayersTurn {
                expected: expected.clone(),
                caller: mv.player.clone(),
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the tile lies on the board.
pub struct TileInBounds;

impl TileInBounds {
    /// Fails with [`GameError::OutOfBounds`].
    pub fn check(mv: &Move) -> Result<(), GameError> {
        if mv.tile.in_bounds() {
            Ok(())
        } else {
            Err(GameError::OutOfBounds(mv.tile))
        }
    }
}

/// Precondition: the tile is not yet marked.
pub struct TileIsEmpty;

impl TileIsEmpty {
    /// Fails with [`GameError::TileOccupied`].
    pub fn check(mv: &Move, game: &Game) -> Result<(), GameError> {
        if game.board().get(mv.tile)?.is_empty() {
            Ok(())
        } else {
            Err(GameError::TileOccupied(mv.tile))
        }
    }
}

/// Composite precondition, checked in rejection order: game over, wrong
/// player, bad tile, occupied tile.
pub struct LegalPlay;

impl LegalPlay {
    /// Validates all preconditions for a move.
    #[instrument(skip(game), fields(turn = game.turn()))]
    pub fn check(mv: &Move, game: &Game) -> Result<(), GameError> {
        GameIsActive::check(game)?;
        PlayersTurn::check(mv, game)?;
        TileInBounds::check(mv)?;
        TileIsEmpty::check(mv, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for [`Game::play`].
///
/// Preconditions: see [`LegalPlay`].
///
/// Postconditions:
/// - exactly one move was appended to history
/// - the turn advanced by one if the game is still active, else stayed put
/// - all [`GameInvariants`] hold
pub struct PlayContract;

impl Contract<Game, Move> for PlayContract {
    fn pre(game: &Game, action: &Move) -> Result<(), GameError> {
        LegalPlay::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), GameError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "History did not grow by one move"
            );
            return Err(GameError::InvariantViolation(
                "Postcondition failed: history must grow by exactly one move".to_string(),
            ));
        }

        let expected_turn = if after.is_active() {
            before.turn() + 1
        } else {
            before.turn()
        };
        if after.turn() != expected_turn {
            warn!(
                before = before.turn(),
                after = after.turn(),
                expected_turn,
                "Turn counter moved unexpectedly"
            );
            return Err(GameError::InvariantViolation(format!(
                "Postcondition failed: turn should be {expected_turn}, found {}",
                after.turn()
            )));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant check failed");
            GameError::InvariantViolation(format!("Postcondition failed: {descriptions}"))
        })
    }
}
