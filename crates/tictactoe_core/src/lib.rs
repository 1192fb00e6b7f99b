//! Tic-tac-toe rules engine.
//!
//! A [`Game`] is created with [`Game::setup`] and advanced one move at a
//! time with [`Game::play`]. Each call is all-or-nothing: it either
//! commits the whole transition (mark placed, turn or state updated) or
//! returns a [`GameError`] and leaves the game exactly as it was.
//!
//! ```
//! use tictactoe_core::{Game, GameState, PlayerId, Tile};
//!
//! let (alice, bob) = (PlayerId::new("alice"), PlayerId::new("bob"));
//! let mut game = Game::setup(alice.clone(), bob.clone())?;
//! game.play(&alice, Tile::new(1, 1))?;
//! assert!(game.play(&alice, Tile::new(0, 0)).is_err());
//! assert_eq!(game.state(), &GameState::Active);
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod error;
mod game;
pub mod invariants;
pub mod rules;
mod snapshot;
mod state;
mod types;

pub use action::Move;
pub use board::{Board, SIZE, all_tiles};
pub use contracts::{
    Contract, GameIsActive, LegalPlay, PlayContract, PlayersTurn, TileInBounds, TileIsEmpty,
};
pub use error::GameError;
pub use game::Game;
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, MarkParityInvariant,
    MonotonicBoardInvariant, TurnCounterInvariant,
};
pub use snapshot::GameSnapshot;
pub use state::GameState;
pub use types::{Mark, PlayerId, Square, Tile};
