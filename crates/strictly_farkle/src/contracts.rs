//! Contract-based validation for Farkle actions.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.
//! Preconditions are checked on every action; postconditions run in debug
//! builds against the state the action produced.

use crate::action::{Action, ActionError};
use crate::invariants::{FarkleInvariants, InvariantSet};
use crate::state::TurnState;
use crate::types::DieState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ActionError>;

    /// Checks postconditions relating the state before and after the action.
    fn post(before: &S, after: &S, action: &A) -> Result<(), ActionError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the phase table permits the action.
pub struct PhasePermits;

impl PhasePermits {
    /// Rejects actions the current phase does not allow.
    #[instrument(skip(state))]
    pub fn check(action: &Action, state: &TurnState) -> Result<(), ActionError> {
        if state.phase().permits(action) {
            Ok(())
        } else {
            Err(ActionError::IllegalPhaseTransition {
                action: *action,
                phase: state.phase(),
            })
        }
    }
}

/// Precondition: a toggled die exists and has not been banked.
pub struct DieTogglable;

impl DieTogglable {
    /// Rejects out-of-range and locked dice.
    #[instrument(skip(state))]
    pub fn check(index: usize, state: &TurnState) -> Result<(), ActionError> {
        if state.dice().get(index)?.state() == DieState::Locked {
            Err(ActionError::DieLocked(index))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the selection is worth something.
pub struct SelectionScores;

impl SelectionScores {
    /// Rejects banking an empty or worthless selection.
    #[instrument(skip(state))]
    pub fn check(state: &TurnState) -> Result<(), ActionError> {
        if state.selected_score() == 0 {
            Err(ActionError::NoSelection)
        } else {
            Ok(())
        }
    }
}

/// Composite precondition for any action.
pub struct LegalAction;

impl LegalAction {
    /// Validates all preconditions for `action`.
    #[instrument(skip(state))]
    pub fn check(action: &Action, state: &TurnState) -> Result<(), ActionError> {
        PhasePermits::check(action, state)?;
        match action {
            Action::ToggleDie(index) => DieTogglable::check(*index, state),
            Action::BankSelection => SelectionScores::check(state),
            _ => Ok(()),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Properties
// ─────────────────────────────────────────────────────────────

/// Locked dice keep their face and state until the round resets.
pub struct LockedDiceStable;

impl LockedDiceStable {
    /// Checks that every die locked before is unchanged after.
    pub fn holds(before: &TurnState, after: &TurnState, action: &Action) -> bool {
        if action.resets_round() {
            return true;
        }
        before
            .dice()
            .iter()
            .zip(after.dice().iter())
            .filter(|(old, _)| old.state() == DieState::Locked)
            .all(|(old, new)| old == new)
    }
}

/// Scores only move the way the rules allow.
///
/// The round score grows or returns to zero. The total score and round
/// number never decrease, and the total only grows by the round score
/// being ended. A game reset is the one exception.
pub struct ScoresMonotonic;

impl ScoresMonotonic {
    /// Checks counter movement between two states.
    pub fn holds(before: &TurnState, after: &TurnState, action: &Action) -> bool {
        if *action == Action::ResetGame {
            return after.total_score() == 0
                && after.round_number() == 0
                && after.round_score() == 0;
        }

        let round_ok = after.round_score() >= before.round_score() || after.round_score() == 0;
        let total_ok = match action {
            Action::EndRound => {
                after.total_score() == before.total_score().saturating_add(before.round_score())
            }
            _ => after.total_score() == before.total_score(),
        };
        let round_number_ok = match action {
            Action::EndRound | Action::ForfeitRound => {
                after.round_number() == before.round_number().saturating_add(1)
            }
            _ => after.round_number() == before.round_number(),
        };

        round_ok && total_ok && round_number_ok
    }
}

// ─────────────────────────────────────────────────────────────
//  Action Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for every engine action.
///
/// Preconditions:
/// - Phase permits the action
/// - Toggled die exists and is not locked
/// - Banked selection scores
///
/// Postconditions:
/// - Turn-state invariants hold
/// - Locked dice are stable
/// - Score counters are monotonic
pub struct ActionContract;

impl Contract<TurnState, Action> for ActionContract {
    fn pre(state: &TurnState, action: &Action) -> Result<(), ActionError> {
        LegalAction::check(action, state)
    }

    fn post(before: &TurnState, after: &TurnState, action: &Action) -> Result<(), ActionError> {
        let mut failures: Vec<String> = match FarkleInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations.into_iter().map(|v| v.description).collect(),
        };
        if !LockedDiceStable::holds(before, after, action) {
            failures.push("Locked dice changed mid-round".to_string());
        }
        if !ScoresMonotonic::holds(before, after, action) {
            failures.push("Score counters moved illegally".to_string());
        }

        if failures.is_empty() {
            Ok(())
        } else {
            let descriptions = failures.join("; ");
            warn!(%action, %descriptions, "Postcondition failed");
            Err(ActionError::InvariantViolation(format!(
                "Postcondition failed: {}",
                descriptions
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GamePhase, ScriptedDice, TurnEngine};

    fn rolled(values: &[u8]) -> TurnEngine<ScriptedDice> {
        let dice = ScriptedDice::from_values(values).expect("valid script");
        let mut engine = TurnEngine::with_dice(dice);
        engine.roll().expect("roll allowed");
        engine
    }

    #[test]
    fn test_precondition_phase() {
        let state = TurnState::default();
        assert!(ActionContract::pre(&state, &Action::Roll).is_ok());
        assert!(matches!(
            ActionContract::pre(&state, &Action::ToggleDie(0)),
            Err(ActionError::IllegalPhaseTransition {
                phase: GamePhase::PreRoll,
                ..
            })
        ));
    }

    #[test]
    fn test_precondition_index_before_lock() {
        let engine = rolled(&[1, 1, 1, 2, 3, 4]);
        assert_eq!(
            ActionContract::pre(engine.state(), &Action::ToggleDie(6)),
            Err(ActionError::InvalidDieIndex(6))
        );
    }

    #[test]
    fn test_precondition_empty_selection() {
        let engine = rolled(&[1, 1, 1, 2, 3, 4]);
        assert_eq!(
            ActionContract::pre(engine.state(), &Action::BankSelection),
            Err(ActionError::NoSelection)
        );
    }

    #[test]
    fn test_postcondition_detects_relocked_face_change() {
        let mut engine = rolled(&[1, 1, 1, 2, 3, 4]);
        engine.toggle_die(0).expect("toggle allowed");
        engine.bank_selection().expect("bank allowed");
        let before = engine.state().clone();

        let mut after = before.clone();
        after
            .dice
            .get_mut(0)
            .expect("index in range")
            .set_face(crate::Face::Six);

        assert!(ActionContract::post(&before, &after, &Action::Roll).is_err());
        assert!(ActionContract::post(&before, &after, &Action::StartRound).is_ok());
    }

    #[test]
    fn test_postcondition_detects_total_drop() {
        let before = TurnState {
            total_score: 500,
            ..TurnState::default()
        };
        let after = TurnState::default();
        assert!(ActionContract::post(&before, &after, &Action::StartRound).is_err());
        assert!(ActionContract::post(&before, &after, &Action::ResetGame).is_ok());
    }
}
