//! First-class invariants for Farkle turn state.
//!
//! Invariants are properties of a single state that hold between any two
//! actions. Properties relating a state to its predecessor live in the
//! contracts module.

#[cfg(kani)]
mod verification;

/// A property of a turn state, checked after every committed action.
pub trait Invariant<S> {
    /// Returns true when `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Text reported when the property fails.
    fn description() -> &'static str;
}

/// A broken property found while checking an action's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// What the state got wrong.
    pub description: String,
}

impl InvariantViolation {
    /// Records a broken property.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked as one group, such as [`FarkleInvariants`].
///
/// Tuples of two or three invariants form a set.
pub trait InvariantSet<S> {
    /// Runs every member and reports all that fail, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
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
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod bust_recorded;
pub mod phase_consistent;
pub mod selected_score;

pub use bust_recorded::BustRecordedInvariant;
pub use phase_consistent::PhaseConsistentInvariant;
pub use selected_score::SelectedScoreInvariant;

/// All turn-state invariants as a composable set.
pub type FarkleInvariants = (
    SelectedScoreInvariant,
    PhaseConsistentInvariant,
    BustRecordedInvariant,
);
