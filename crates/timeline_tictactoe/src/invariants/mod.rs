//! First-class invariants for the time-travel game.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
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
/// Implemented for pairs and triples of invariants; violations come back
/// in tuple order.
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
                let violations: Vec<InvariantViolation> = [
                    $((<$inv as Invariant<S>>::holds(state), <$inv as Invariant<S>>::description()),)+
                ]
                .into_iter()
                .filter(|(holds, _)| !holds)
                .map(|(_, description)| InvariantViolation::new(description))
                .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

pub mod alternating_turn;
pub mod anchored_history;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use anchored_history::AnchoredHistoryInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All game invariants as a composable set.
pub type TimelineInvariants = (
    AnchoredHistoryInvariant,
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
);
