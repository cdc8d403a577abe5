//! Text rendering of engine views, events, and rejections.

use strictly_farkle::{Action, ActionError, DieState, Event, GamePhase, TurnView};

/// Renders the board: dice, scores, and what the player can do next.
pub fn render_view(view: &TurnView) -> String {
    let dice = view
        .dice()
        .iter()
        .enumerate()
        .map(|(i, die)| {
            let face = die.face();
            match die.state() {
                DieState::Available => format!("{}: {} ", i + 1, face),
                DieState::Selected => format!("{}:({})", i + 1, face),
                DieState::Locked => format!("{}:[{}]", i + 1, face),
            }
        })
        .collect::<Vec<_>>()
        .join("  ");

    let mut moves = Vec::new();
    if view.controls().can_roll {
        moves.push("roll");
    }
    if *view.phase() == GamePhase::Scoring {
        moves.push("toggle <n..>");
    }
    if view.controls().can_bank {
        moves.push("bank");
    }
    if view.controls().can_end_round {
        moves.push("stop");
    }

    format!(
        "{dice}\n\
         Selected Score: {}  Round Score: {}  Total Score: {}  Current Round: {}\n\
         Phase: {}  Moves: {}",
        view.selected_score(),
        view.round_score(),
        view.total_score(),
        view.round_number(),
        view.phase(),
        moves.join(", "),
    )
}

/// One-line feedback for a successful action.
pub fn describe_event(event: &Event) -> String {
    match event {
        Event::RoundStarted => "Dice reset.".to_string(),
        Event::Rolled { available_score } => {
            format!("Rolled. Up to {available_score} points on the table.")
        }
        Event::Bust(bust) => format!("{bust}."),
        Event::DieToggled {
            index,
            state,
            selected_score,
        } => format!("Die {} {}. Selected score: {selected_score}", index + 1, state),
        Event::SelectionBanked {
            banked,
            round_exhausted: true,
            ..
        } => format!("Banked {banked}. Round over! Stop to advance to the next round."),
        Event::SelectionBanked {
            banked,
            round_score,
            ..
        } => format!("Banked {banked}. Round score: {round_score}. Roll again or stop."),
        Event::RoundEnded {
            round_number,
            total_score,
            ..
        } => format!("Round {round_number} complete. Total score: {total_score}"),
        Event::RoundForfeited {
            round_number,
            forfeited,
        } => format!("Round {round_number} forfeited, {forfeited} points lost."),
        Event::GameReset => "New game.".to_string(),
    }
}

/// Player-facing text for a rejected action.
pub fn describe_error(err: &ActionError) -> String {
    match err {
        ActionError::IllegalPhaseTransition {
            action: Action::ToggleDie(_),
            phase: GamePhase::PreRoll,
        } => "Roll before selecting dice to score!".to_string(),
        ActionError::DieLocked(_) => "Dice has already been scored!".to_string(),
        ActionError::NoSelection => "Select scoring dice before banking!".to_string(),
        ActionError::InvalidDieIndex(index) => {
            format!("There is no die {}, pick 1-6.", index + 1)
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_farkle::{ScriptedDice, TurnEngine};

    #[test]
    fn test_render_marks_die_states() {
        let dice = ScriptedDice::from_values(&[1, 1, 1, 2, 3, 4]).expect("valid script");
        let mut engine = TurnEngine::with_dice(dice);
        engine.roll().expect("roll allowed");
        engine.toggle_die(0).expect("toggle allowed");

        let text = render_view(&engine.view());
        assert!(text.starts_with("1:(1)  2: 1 "));
        assert!(text.contains("Selected Score: 100"));
        assert!(text.contains("Moves: toggle <n..>, bank"));
    }

    #[test]
    fn test_errors_use_player_wording() {
        let err = ActionError::IllegalPhaseTransition {
            action: Action::ToggleDie(2),
            phase: GamePhase::PreRoll,
        };
        assert_eq!(describe_error(&err), "Roll before selecting dice to score!");
        assert_eq!(
            describe_error(&ActionError::InvalidDieIndex(6)),
            "There is no die 7, pick 1-6."
        );
    }
}
