//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every accepted
//! placement. They are checked in debug builds and can be tested on their own.

use crate::Game;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
/// Implementations are provided for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod active_mark_bound;
pub mod disjoint_ownership;
pub mod grid_consistent;
pub mod no_stale_winner;

pub use active_mark_bound::ActiveMarkBoundInvariant;
pub use disjoint_ownership::DisjointOwnershipInvariant;
pub use grid_consistent::GridConsistentInvariant;
pub use no_stale_winner::NoStaleWinnerInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    ActiveMarkBoundInvariant,
    DisjointOwnershipInvariant,
    GridConsistentInvariant,
    NoStaleWinnerInvariant,
);

/// Logs every violated invariant and panics in debug builds.
#[instrument(skip(game))]
pub fn assert_invariants(game: &Game) {
    if let Err(violations) = GameInvariants::check_all(game) {
        for violation in &violations {
            warn!(invariant = %violation.description, "Invariant violated");
        }
        debug_assert!(violations.is_empty(), "Invariants violated: {violations:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Variant};
    use strum::IntoEnumIterator;

    #[test]
    fn test_invariant_set_holds_for_new_games() {
        for variant in Variant::iter() {
            assert!(GameInvariants::check_all(&Game::new(variant)).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_holds_through_eviction() {
        let game = Game::replay(
            Variant::Rolling,
            &[
                Position::TopLeft,
                Position::BottomLeft,
                Position::Center,
                Position::BottomCenter,
                Position::MiddleRight,
                Position::TopCenter,
                Position::TopRight,
            ],
        )
        .unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (ActiveMarkBoundInvariant, DisjointOwnershipInvariant);
        assert!(TwoInvariants::check_all(&Game::new(Variant::RollingHistory)).is_ok());
    }
}
