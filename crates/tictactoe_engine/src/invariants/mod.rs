//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are checked in debug builds and can be tested independently.

pub mod mark_balance;
pub mod turn_consistency;

pub use mark_balance::MarkBalanceInvariant;
pub use turn_consistency::TurnConsistencyInvariant;

#[cfg(debug_assertions)]
use crate::session::GameSession;

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
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
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

/// All session invariants as a composable set.
pub type SessionInvariants = (MarkBalanceInvariant, TurnConsistencyInvariant);

/// Asserts that all session invariants hold (panics on violation).
#[cfg(debug_assertions)]
pub(crate) fn assert_invariants(session: &GameSession) {
    use tracing::warn;

    if let Err(violations) = SessionInvariants::check_all(session) {
        for v in &violations {
            warn!(invariant = %v.description, "Invariant violated");
        }
        panic!("Session invariants violated: {:?}", violations);
    }
}
