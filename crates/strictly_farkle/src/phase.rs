//! Turn phases and the transition table.

use crate::action::Action;
use serde::{Deserialize, Serialize};

/// Where the current round stands.
///
/// Exactly one phase is active at a time. Which actions are legal is decided
/// by [`GamePhase::permits`] and nothing else.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum GamePhase {
    /// Waiting for a roll.
    #[default]
    PreRoll,
    /// Dice rolled; the player selects and banks scoring dice.
    Scoring,
    /// All six dice locked; the round can only be ended.
    RoundExhausted,
    /// The last roll scored nothing; forfeit the round or reset the game.
    Bust,
}

impl GamePhase {
    /// Transition table: whether `action` may be taken in this phase.
    pub fn permits(self, action: &Action) -> bool {
        use GamePhase::*;
        match action {
            Action::StartRound | Action::EndRound => self != Bust,
            Action::Roll => self == PreRoll,
            Action::ToggleDie(_) | Action::BankSelection => self == Scoring,
            Action::ForfeitRound | Action::ResetGame => true,
        }
    }
}
