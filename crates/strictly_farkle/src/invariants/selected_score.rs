//! Selected score invariant: the selection score is never stale.

use super::Invariant;
use crate::TurnState;

/// Invariant: `selected_score` equals the score of exactly the selected dice.
pub struct SelectedScoreInvariant;

impl Invariant<TurnState> for SelectedScoreInvariant {
    fn holds(state: &TurnState) -> bool {
        state.selected_score() == state.rules().score(state.selected_faces())
    }

    fn description() -> &'static str {
        "Selected score matches the selected dice"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ScriptedDice, TurnEngine};

    #[test]
    fn test_new_game_holds() {
        assert!(SelectedScoreInvariant::holds(&TurnState::default()));
    }

    #[test]
    fn test_holds_after_each_toggle() {
        let dice = ScriptedDice::from_values(&[5, 5, 1, 2, 3, 4]).expect("valid script");
        let mut engine = TurnEngine::with_dice(dice);
        engine.roll().expect("roll allowed");
        for index in [0, 2, 1, 0] {
            engine.toggle_die(index).expect("toggle allowed");
            assert!(SelectedScoreInvariant::holds(engine.state()));
        }
    }

    #[test]
    fn test_stale_score_violates() {
        let mut state = TurnState::default();
        state.selected_score = 100;
        assert!(!SelectedScoreInvariant::holds(&state));
    }
}
