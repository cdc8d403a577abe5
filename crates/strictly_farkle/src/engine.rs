//! The turn engine: owns the dice and score counters and applies actions.
//!
//! Every command goes through [`TurnEngine::apply`]. The action is checked
//! against [`ActionContract`], applied to a copy of the state, and the copy
//! is committed only once the postconditions hold. A rejected action leaves
//! the engine exactly as it was.

use crate::action::{Action, ActionError, Bust, BustChoice, Event};
use crate::contracts::{ActionContract, Contract};
use crate::dice_source::{DiceSource, SeededDice};
use crate::phase::GamePhase;
use crate::scoring::ScoringRules;
use crate::state::TurnState;
use crate::types::{Dice, Die, DieState};
use crate::view::{Controls, TurnView};
use tracing::{debug, info, instrument, warn};

/// Single-player Farkle engine.
#[derive(Debug, Clone)]
pub struct TurnEngine<D = SeededDice> {
    state: TurnState,
    dice_source: D,
}

impl TurnEngine<SeededDice> {
    /// A new game with entropy-seeded dice and the standard scoring table.
    #[instrument]
    pub fn new() -> Self {
        Self::with_dice(SeededDice::from_entropy())
    }
}

impl Default for TurnEngine<SeededDice> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DiceSource> TurnEngine<D> {
    /// A new game rolling from `dice_source` with the standard scoring table.
    pub fn with_dice(dice_source: D) -> Self {
        Self::with_rules(dice_source, ScoringRules::default())
    }

    /// A new game rolling from `dice_source` and scoring with `rules`.
    #[instrument(skip(dice_source))]
    pub fn with_rules(dice_source: D, rules: ScoringRules) -> Self {
        Self {
            state: TurnState::new(rules),
            dice_source,
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────

    /// Returns the full turn state.
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    /// Returns the dice.
    pub fn dice(&self) -> &Dice {
        self.state.dice()
    }

    /// Returns the die at `index` (0-5).
    pub fn die(&self, index: usize) -> Result<&Die, ActionError> {
        self.state.dice().get(index)
    }

    /// Score of the selected dice.
    pub fn selected_score(&self) -> u32 {
        self.state.selected_score()
    }

    /// Score banked this round.
    pub fn round_score(&self) -> u32 {
        self.state.round_score()
    }

    /// Score banked across rounds.
    pub fn total_score(&self) -> u32 {
        self.state.total_score()
    }

    /// Rounds ended or forfeited so far.
    pub fn round_number(&self) -> u32 {
        self.state.round_number()
    }

    /// Score of every die that is not locked.
    pub fn available_score(&self) -> u32 {
        self.state.available_score()
    }

    /// The pending bust, while in [`GamePhase::Bust`].
    pub fn last_bust(&self) -> Option<&Bust> {
        self.state.bust()
    }

    /// Whether `action` would be accepted right now.
    pub fn is_legal(&self, action: &Action) -> bool {
        ActionContract::pre(&self.state, action).is_ok()
    }

    /// Whether rolling is allowed.
    pub fn can_roll(&self) -> bool {
        self.is_legal(&Action::Roll)
    }

    /// Whether banking the selection is allowed.
    pub fn can_bank(&self) -> bool {
        self.is_legal(&Action::BankSelection)
    }

    /// Whether ending the round is offered to the player.
    ///
    /// The engine accepts [`Action::EndRound`] more widely than this; this
    /// is when stopping makes sense: after banking something and before
    /// rolling again, or once every die is locked.
    pub fn can_end_round(&self) -> bool {
        match self.state.phase() {
            GamePhase::PreRoll => self.state.round_score() > 0,
            GamePhase::RoundExhausted => true,
            GamePhase::Scoring | GamePhase::Bust => false,
        }
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> TurnView {
        TurnView::new(
            &self.state,
            Controls {
                can_roll: self.can_roll(),
                can_bank: self.can_bank(),
                can_end_round: self.can_end_round(),
            },
        )
    }

    // ─────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────

    /// Resets the dice to a fresh pre-roll round. Scores are untouched.
    pub fn start_round(&mut self) -> Result<Event, ActionError> {
        self.apply(Action::StartRound)
    }

    /// Rolls every die that is not locked.
    ///
    /// Returns [`Event::Bust`] when nothing rolled scores.
    pub fn roll(&mut self) -> Result<Event, ActionError> {
        self.apply(Action::Roll)
    }

    /// Flips the die at `index` between available and selected.
    pub fn toggle_die(&mut self, index: usize) -> Result<Event, ActionError> {
        self.apply(Action::ToggleDie(index))
    }

    /// Locks the selected dice and adds their score to the round.
    pub fn bank_selection(&mut self) -> Result<Event, ActionError> {
        self.apply(Action::BankSelection)
    }

    /// Moves the round score into the total and starts the next round.
    pub fn end_round(&mut self) -> Result<Event, ActionError> {
        self.apply(Action::EndRound)
    }

    /// Discards the round score and starts the next round.
    pub fn forfeit_round(&mut self) -> Result<Event, ActionError> {
        self.apply(Action::ForfeitRound)
    }

    /// Zeroes every counter and starts over.
    pub fn reset_game(&mut self) -> Result<Event, ActionError> {
        self.apply(Action::ResetGame)
    }

    /// Answers a pending bust.
    #[instrument(skip(self))]
    pub fn resolve_bust(&mut self, choice: BustChoice) -> Result<Event, ActionError> {
        let action = Action::from(choice);
        if self.state.phase() != GamePhase::Bust {
            warn!(%action, phase = %self.state.phase(), "No bust to resolve");
            return Err(ActionError::NoBustPending(self.state.phase()));
        }
        self.apply(action)
    }

    /// Validates and applies an action.
    #[instrument(skip(self), fields(phase = %self.state.phase()))]
    pub fn apply(&mut self, action: Action) -> Result<Event, ActionError> {
        if let Err(err) = ActionContract::pre(&self.state, &action) {
            warn!(%action, %err, "Action rejected");
            return Err(err);
        }

        let mut next = self.state.clone();
        let event = transition(&mut next, &mut self.dice_source, action)?;

        #[cfg(debug_assertions)]
        ActionContract::post(&self.state, &next, &action)?;

        debug!(%action, from = %self.state.phase(), to = %next.phase(), "Action applied");
        self.state = next;
        Ok(event)
    }
}

fn transition<D: DiceSource>(
    state: &mut TurnState,
    dice_source: &mut D,
    action: Action,
) -> Result<Event, ActionError> {
    match action {
        Action::StartRound => {
            state.reset_dice();
            Ok(Event::RoundStarted)
        }
        Action::Roll => Ok(roll(state, dice_source)),
        Action::ToggleDie(index) => toggle(state, index),
        Action::BankSelection => Ok(bank(state)),
        Action::EndRound => {
            let banked = state.round_score;
            finish_round(state);
            info!(
                round_number = state.round_number,
                banked,
                total_score = state.total_score,
                "Round ended"
            );
            Ok(Event::RoundEnded {
                round_number: state.round_number,
                banked,
                total_score: state.total_score,
            })
        }
        Action::ForfeitRound => {
            let forfeited = state.round_score;
            state.round_score = 0;
            finish_round(state);
            info!(round_number = state.round_number, forfeited, "Round forfeited");
            Ok(Event::RoundForfeited {
                round_number: state.round_number,
                forfeited,
            })
        }
        Action::ResetGame => {
            state.total_score = 0;
            state.round_number = 0;
            state.round_score = 0;
            state.selected_score = 0;
            state.reset_dice();
            info!("Game reset");
            Ok(Event::GameReset)
        }
    }
}

fn roll<D: DiceSource>(state: &mut TurnState, dice_source: &mut D) -> Event {
    for die in state.dice.iter_mut().filter(|d| d.is_rollable()) {
        die.set_face(dice_source.roll_face());
    }
    state.refresh_selected_score();

    let available_score = state.available_score();
    if available_score == 0 {
        let bust = Bust::new(
            state.dice.rollable_faces(),
            state.round_score,
            state.total_score,
            state.round_number,
        );
        info!(%bust, round_score = state.round_score, "Bust");
        state.phase = GamePhase::Bust;
        state.bust = Some(bust.clone());
        Event::Bust(bust)
    } else {
        debug!(available_score, "Rolled");
        state.phase = GamePhase::Scoring;
        Event::Rolled { available_score }
    }
}

fn toggle(state: &mut TurnState, index: usize) -> Result<Event, ActionError> {
    let die = state.dice.get_mut(index)?;
    let new_state = match die.state() {
        DieState::Available => DieState::Selected,
        DieState::Selected => DieState::Available,
        DieState::Locked => return Err(ActionError::DieLocked(index)),
    };
    die.set_state(new_state);
    state.refresh_selected_score();

    debug!(index, %new_state, selected_score = state.selected_score, "Die toggled");
    Ok(Event::DieToggled {
        index,
        state: new_state,
        selected_score: state.selected_score,
    })
}

fn bank(state: &mut TurnState) -> Event {
    let banked = state.selected_score;
    for die in state
        .dice
        .iter_mut()
        .filter(|d| d.state() == DieState::Selected)
    {
        die.set_state(DieState::Locked);
    }
    state.round_score = state.round_score.saturating_add(banked);
    state.refresh_selected_score();

    let round_exhausted = state.dice.all_locked();
    state.phase = if round_exhausted {
        GamePhase::RoundExhausted
    } else {
        GamePhase::PreRoll
    };

    debug!(banked, round_score = state.round_score, round_exhausted, "Selection banked");
    Event::SelectionBanked {
        banked,
        round_score: state.round_score,
        round_exhausted,
    }
}

fn finish_round(state: &mut TurnState) {
    state.round_number = state.round_number.saturating_add(1);
    state.total_score = state.total_score.saturating_add(state.round_score);
    state.round_score = 0;
    state.reset_dice();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedDice;

    fn engine(values: &[u8]) -> TurnEngine<ScriptedDice> {
        TurnEngine::with_dice(ScriptedDice::from_values(values).expect("valid script"))
    }

    #[test]
    fn test_new_game_is_pre_roll() {
        let engine = engine(&[1]);
        assert_eq!(engine.phase(), GamePhase::PreRoll);
        assert!(engine.can_roll());
        assert!(!engine.can_bank());
        assert!(!engine.can_end_round());
        assert_eq!(engine.total_score(), 0);
    }

    #[test]
    fn test_roll_moves_to_scoring() {
        let mut engine = engine(&[1, 1, 1, 2, 3, 4]);
        let event = engine.roll().expect("roll allowed");
        assert_eq!(event, Event::Rolled { available_score: 1000 });
        assert_eq!(engine.phase(), GamePhase::Scoring);
    }

    #[test]
    fn test_rejected_action_leaves_state_untouched() {
        let mut engine = engine(&[1, 1, 1, 2, 3, 4]);
        let before = engine.state().clone();
        let err = engine.toggle_die(0).unwrap_err();
        assert!(matches!(err, ActionError::IllegalPhaseTransition { .. }));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_toggle_twice_deselects() {
        let mut engine = engine(&[1, 5, 2, 3, 4, 6]);
        engine.roll().expect("roll allowed");
        engine.toggle_die(1).expect("toggle allowed");
        assert_eq!(engine.selected_score(), 50);
        engine.toggle_die(1).expect("toggle allowed");
        assert_eq!(engine.selected_score(), 0);
        assert_eq!(engine.die(1).expect("in range").state(), DieState::Available);
    }

    #[test]
    fn test_locked_dice_are_not_rerolled() {
        let mut engine = engine(&[1, 2, 3, 4, 6, 6, 5, 5, 5, 5, 5]);
        engine.roll().expect("roll allowed");
        engine.toggle_die(0).expect("toggle allowed");
        engine.bank_selection().expect("bank allowed");

        engine.roll().expect("roll allowed");
        let locked = engine.die(0).expect("in range");
        assert_eq!(locked.state(), DieState::Locked);
        assert_eq!(locked.face().value(), 1);
        assert_eq!(engine.available_score(), 1500);
    }

    #[test]
    fn test_banking_all_six_exhausts_round() {
        let mut engine = engine(&[1, 1, 1, 5, 5, 5]);
        engine.roll().expect("roll allowed");
        for index in 0..6 {
            engine.toggle_die(index).expect("toggle allowed");
        }
        let event = engine.bank_selection().expect("bank allowed");
        assert_eq!(
            event,
            Event::SelectionBanked {
                banked: 1500,
                round_score: 1500,
                round_exhausted: true,
            }
        );
        assert_eq!(engine.phase(), GamePhase::RoundExhausted);
        assert!(engine.can_end_round());
        assert!(!engine.can_roll());
    }

    #[test]
    fn test_bust_blocks_everything_but_forfeit_and_reset() {
        let mut engine = engine(&[2, 3, 4, 6, 2, 3]);
        let event = engine.roll().expect("roll allowed");
        assert!(matches!(event, Event::Bust(_)));
        assert_eq!(engine.phase(), GamePhase::Bust);
        assert!(engine.last_bust().is_some());
        assert!(engine.roll().is_err());
        assert!(engine.end_round().is_err());
        assert!(engine.start_round().is_err());
    }

    #[test]
    fn test_resolve_bust_requires_bust() {
        let mut engine = engine(&[1]);
        assert_eq!(
            engine.resolve_bust(BustChoice::ForfeitRound),
            Err(ActionError::NoBustPending(GamePhase::PreRoll))
        );
        assert_eq!(engine.round_number(), 0);
    }

    #[test]
    fn test_end_round_accepted_while_scoring() {
        let mut engine = engine(&[1, 1, 1, 2, 3, 4]);
        engine.roll().expect("roll allowed");
        let event = engine.end_round().expect("end round allowed");
        assert_eq!(
            event,
            Event::RoundEnded {
                round_number: 1,
                banked: 0,
                total_score: 0,
            }
        );
        assert_eq!(engine.phase(), GamePhase::PreRoll);
    }

    #[test]
    fn test_view_reflects_controls() {
        let mut engine = engine(&[5, 2, 3, 4, 6, 6]);
        engine.roll().expect("roll allowed");
        engine.toggle_die(0).expect("toggle allowed");
        let view = engine.view();
        assert_eq!(*view.phase(), GamePhase::Scoring);
        assert!(view.controls().can_bank);
        assert!(!view.controls().can_roll);
        assert_eq!(*view.selected_score(), 50);
    }
}
