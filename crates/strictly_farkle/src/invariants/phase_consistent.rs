//! Phase consistency invariant: the phase agrees with the dice.

use super::Invariant;
use crate::{DieState, GamePhase, TurnState};

/// Invariant: the round is exhausted exactly when all six dice are locked,
/// and dice are only ever selected while scoring.
pub struct PhaseConsistentInvariant;

impl Invariant<TurnState> for PhaseConsistentInvariant {
    fn holds(state: &TurnState) -> bool {
        let exhausted = state.phase() == GamePhase::RoundExhausted;
        let selection_ok =
            state.phase() == GamePhase::Scoring || state.dice().count_in(DieState::Selected) == 0;
        exhausted == state.dice().all_locked() && selection_ok
    }

    fn description() -> &'static str {
        "Phase agrees with die states"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(PhaseConsistentInvariant::holds(&TurnState::default()));
    }

    #[test]
    fn test_selection_outside_scoring_violates() {
        let mut state = TurnState::default();
        state.dice.get_mut(3).expect("index in range").set_state(DieState::Selected);
        assert!(!PhaseConsistentInvariant::holds(&state));

        state.phase = GamePhase::Scoring;
        assert!(PhaseConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_exhausted_without_all_locked_violates() {
        let mut state = TurnState::default();
        state.phase = GamePhase::RoundExhausted;
        assert!(!PhaseConsistentInvariant::holds(&state));
    }
}
