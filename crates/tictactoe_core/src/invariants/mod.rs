//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every accepted
//! operation. They are checked as postconditions in debug builds and can be
//! tested independently.

pub mod mark_parity;
pub mod monotonic_board;
pub mod turn_counter;

pub use mark_parity::MarkParityInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use turn_counter::TurnCounterInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for 2- and 3-tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All tic-tac-toe invariants as a composable set.
pub type GameInvariants = (
    TurnCounterInvariant,
    MarkParityInvariant,
    MonotonicBoardInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, Mark, Move, PlayerId, Tile};

    fn started() -> Game {
        Game::setup("alice", "bob").unwrap()
    }

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&started()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = Game::replay(
            "alice",
            "bob",
            &[
                Move::new("alice", Tile::new(0, 0)),
                Move::new("bob", Tile::new(1, 1)),
                Move::new("alice", Tile::new(0, 2)),
            ],
        )
        .unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = started();
        game.play(&PlayerId::new("alice"), Tile::new(1, 1)).unwrap();

        // Mark a cell with no matching history entry
        game.board.set(Tile::new(0, 0), Mark::X).unwrap();

        let expected = <MonotonicBoardInvariant as Invariant<Game>>::description();
        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert!(!violations.is_empty());
        assert!(violations.iter().any(|v| v.description == expected));
    }

    #[test]
    fn test_invariant_set_reports_turn_counter() {
        let mut game = started();
        game.play(&PlayerId::new("alice"), Tile::new(1, 1)).unwrap();
        game.turn = 1;

        let expected = <TurnCounterInvariant as Invariant<Game>>::description();
        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations, vec![InvariantViolation::new(expected)]);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MonotonicBoardInvariant, TurnCounterInvariant);
        assert!(TwoInvariants::check_all(&started()).is_ok());
    }
}
