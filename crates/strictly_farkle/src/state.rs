//! Turn and game state owned by the engine.

use crate::action::Bust;
use crate::phase::GamePhase;
use crate::scoring::ScoringRules;
use crate::types::{Dice, DieState, Face};
use serde::{Deserialize, Serialize};

/// Everything the engine tracks between actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub(crate) dice: Dice,
    pub(crate) phase: GamePhase,
    pub(crate) selected_score: u32,
    pub(crate) round_score: u32,
    pub(crate) total_score: u32,
    pub(crate) round_number: u32,
    pub(crate) rules: ScoringRules,
    pub(crate) bust: Option<Bust>,
}

impl TurnState {
    /// A new game scored with `rules`.
    pub fn new(rules: ScoringRules) -> Self {
        Self {
            dice: Dice::new(),
            phase: GamePhase::PreRoll,
            selected_score: 0,
            round_score: 0,
            total_score: 0,
            round_number: 0,
            rules,
            bust: None,
        }
    }

    /// Returns the dice.
    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Score of the currently selected dice.
    pub fn selected_score(&self) -> u32 {
        self.selected_score
    }

    /// Score banked so far this round.
    pub fn round_score(&self) -> u32 {
        self.round_score
    }

    /// Score banked across completed rounds.
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Number of rounds ended or forfeited.
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// The scoring table in use.
    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// The pending bust, if the last roll scored nothing.
    pub fn bust(&self) -> Option<&Bust> {
        self.bust.as_ref()
    }

    /// Faces of the selected dice.
    pub fn selected_faces(&self) -> Vec<Face> {
        self.dice.faces_in(DieState::Selected)
    }

    /// Score of every die that is not locked.
    pub fn available_score(&self) -> u32 {
        self.rules.score(self.dice.rollable_faces())
    }

    /// Recomputes the selected score from the selected dice.
    pub(crate) fn refresh_selected_score(&mut self) {
        self.selected_score = self.rules.score(self.selected_faces());
    }

    /// Fresh pre-roll dice. Counters other than the selection are untouched.
    pub(crate) fn reset_dice(&mut self) {
        self.dice = Dice::new();
        self.phase = GamePhase::PreRoll;
        self.bust = None;
        self.refresh_selected_score();
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new(ScoringRules::default())
    }
}
