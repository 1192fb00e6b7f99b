//! The game state machine.
//!
//! A [`Game`] is created by [`Game::setup`] and mutated only by
//! [`Game::play`]. Every call either commits a complete transition or
//! leaves the game untouched.

use super::action::Move;
use super::board::Board;
use super::contracts::{Contract, PlayContract};
use super::error::GameError;
use super::rules;
use super::snapshot::GameSnapshot;
use super::state::GameState;
use super::types::{Mark, PlayerId, Tile};
use tracing::{debug, info, instrument, warn};

/// A two-player tic-tac-toe game.
///
/// The player for `turn` is `players[(turn - 1) % 2]` and the mark placed
/// on `turn` is [`Mark::for_turn`]: the first mover always places `O`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) players: [PlayerId; 2],
    pub(crate) turn: u8,
    pub(crate) board: Board,
    pub(crate) state: GameState,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Starts a game between two distinct players.
    ///
    /// `player_a` moves first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPlayers`] if both identities are equal.
    #[instrument(skip_all)]
    pub fn setup(
        player_a: impl Into<PlayerId>,
        player_b: impl Into<PlayerId>,
    ) -> Result<Self, GameError> {
        let (player_a, player_b) = (player_a.into(), player_b.into());
        if player_a == player_b {
            warn!(player = %player_a, "Setup rejected: players must differ");
            return Err(GameError::InvalidPlayers);
        }

        debug!(%player_a, %player_b, "Game set up");
        Ok(Self {
            players: [player_a, player_b],
            turn: 1,
            board: Board::new(),
            state: GameState::Active,
            history: Vec::new(),
        })
    }

    /// Plays the current turn's mark on `tile` for `caller`.
    ///
    /// Checks, in order: the game is active, `caller` is the current
    /// player, the tile is on the board, the tile is empty. The transition
    /// is computed on a copy and swapped in only if it succeeds.
    ///
    /// After placement the game is won by `caller` if any line is
    /// complete, tied if the board is full, and otherwise the turn advances.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`], [`GameError::NotPlayersTurn`],
    /// [`GameError::OutOfBounds`] or [`GameError::TileOccupied`]. The game
    /// is unchanged on error.
    #[instrument(skip(self, caller, tile), fields(turn = self.turn, %caller, %tile))]
    pub fn play(&mut self, caller: &PlayerId, tile: Tile) -> Result<(), GameError> {
        let action = Move::new(caller.clone(), tile);

        if let Err(e) = PlayContract::pre(self, &action) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        let mut next = self.clone();
        next.apply(action)?;

        #[cfg(debug_assertions)]
        PlayContract::post(self, &next)?;

        *self = next;
        Ok(())
    }

    /// Applies a validated move. Only called on a scratch copy.
    fn apply(&mut self, action: Move) -> Result<(), GameError> {
        let mark = self.current_mark();
        self.board.set(action.tile, mark)?;
        debug!(tile = %action.tile, %mark, "Mark placed");

        let mover = action.player.clone();
        self.history.push(action);

        if self.board.winner().is_some() {
            info!(winner = %mover, turn = self.turn, "Game won");
            self.state = GameState::Won { winner: mover };
        } else if rules::is_draw(&self.board) {
            info!(turn = self.turn, "Game tied");
            self.state = GameState::Tied;
        } else {
            self.turn += 1;
        }
        Ok(())
    }

    /// Sets up a game and plays `moves` in order.
    ///
    /// # Errors
    ///
    /// Returns the first rejection, from setup or from any move.
    #[instrument(skip_all, fields(moves = moves.len()))]
    pub fn replay(
        player_a: impl Into<PlayerId>,
        player_b: impl Into<PlayerId>,
        moves: &[Move],
    ) -> Result<Self, GameError> {
        let mut game = Self::setup(player_a, player_b)?;
        for action in moves {
            game.play(&action.player, action.tile)?;
        }
        Ok(game)
    }

    /// Returns the players in turn order.
    pub fn players(&self) -> &[PlayerId; 2] {
        &self.players
    }

    /// Returns the number of the move about to be played.
    ///
    /// Once the game has ended this is the number of the final move.
    pub fn turn(&self) -> u8 {
        self.turn
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game phase.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Slot (0 or 1) of the player whose turn it is.
    pub fn current_player_index(&self) -> usize {
        usize::from((self.turn - 1) % 2)
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &PlayerId {
        &self.players[self.current_player_index()]
    }

    /// The mark the current turn places.
    pub fn current_mark(&self) -> Mark {
        Mark::for_turn(self.turn)
    }

    /// Read-only view for display or status queries.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}
