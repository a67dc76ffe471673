//! First-class invariants for ultimate tic-tac-toe.
//!
//! Invariants are logical properties that must hold between moves.
//! Search leans on them implicitly (every `unplay` must put them back),
//! and the driver checks them explicitly in debug builds.

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

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
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
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod allowed_boards;
pub mod status_cache;
pub mod turn_balance;

pub use allowed_boards::AllowedBoardsInvariant;
pub use status_cache::StatusCacheInvariant;
pub use turn_balance::TurnBalanceInvariant;

/// All ultimate tic-tac-toe invariants as a composable set.
pub type UltimateInvariants = (
    StatusCacheInvariant,
    AllowedBoardsInvariant,
    TurnBalanceInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position, UltimateGame};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = UltimateGame::new();
        assert!(UltimateInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let moves = [
            Move::new(Position::Center, Position::TopLeft),
            Move::new(Position::TopLeft, Position::Center),
            Move::new(Position::Center, Position::BottomRight),
        ];
        let game = UltimateGame::replay(&moves).expect("legal replay");
        assert!(UltimateInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = UltimateGame::new();
        type TwoInvariants = (StatusCacheInvariant, TurnBalanceInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}
