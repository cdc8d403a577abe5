//! First-class actions, events, and rejections.
//!
//! Actions are the player's intent. They are validated against the current
//! phase before anything changes, and a successful action reports what it
//! did as an [`Event`].

use crate::phase::GamePhase;
use crate::types::{DieState, Face};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A command the host can send to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Action {
    /// Reset the dice for a fresh round.
    #[display("start round")]
    StartRound,
    /// Roll every die that is not locked.
    #[display("roll")]
    Roll,
    /// Flip a die between available and selected.
    #[display("toggle die {}", _0)]
    ToggleDie(usize),
    /// Lock the selected dice and add their score to the round.
    #[display("bank selection")]
    BankSelection,
    /// Bank the round score into the total and start the next round.
    #[display("end round")]
    EndRound,
    /// Throw away the round score and start the next round.
    #[display("forfeit round")]
    ForfeitRound,
    /// Zero every counter and start over.
    #[display("reset game")]
    ResetGame,
}

impl Action {
    /// True for actions that throw the current dice away.
    pub fn resets_round(&self) -> bool {
        matches!(
            self,
            Action::StartRound | Action::EndRound | Action::ForfeitRound | Action::ResetGame
        )
    }
}

/// Why the engine refused an action.
///
/// A rejected action never changes engine state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ActionError {
    /// The action is not permitted in the current phase.
    #[display("Cannot {} during {}", action, phase)]
    IllegalPhaseTransition {
        /// The rejected action.
        action: Action,
        /// The phase at the time.
        phase: GamePhase,
    },

    /// The targeted die has already been banked.
    #[display("Die {} has already been scored", _0)]
    DieLocked(usize),

    /// Banking with nothing that scores selected.
    #[display("Nothing selected to bank")]
    NoSelection,

    /// Die index outside 0-5.
    #[display("Die index {} is out of range (must be 0-5)", _0)]
    InvalidDieIndex(usize),

    /// A bust choice was given with no bust to answer.
    #[display("No bust to resolve during {}", _0)]
    NoBustPending(GamePhase),

    /// A postcondition failed after applying the action.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for ActionError {}

/// Emitted when a roll leaves nothing that scores.
///
/// The round cannot continue. The host offers the player a choice between
/// [`BustChoice::ForfeitRound`] and [`BustChoice::ResetGame`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Bust {
    /// Faces of the dice that were rolled.
    rolled: Vec<Face>,
    /// Round score lost if the round is forfeited.
    round_score: u32,
    /// Total score kept if the round is forfeited.
    total_score: u32,
    /// Rounds completed before this one.
    round_number: u32,
}

impl Bust {
    pub(crate) fn new(
        rolled: Vec<Face>,
        round_score: u32,
        total_score: u32,
        round_number: u32,
    ) -> Self {
        Self {
            rolled,
            round_score,
            total_score,
            round_number,
        }
    }
}

impl std::fmt::Display for Bust {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rolled = self
            .rolled
            .iter()
            .map(Face::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "Bust! Rolled [{}], nothing scores", rolled)
    }
}

/// The player's answer to a [`Bust`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BustChoice {
    /// Lose only this round's score.
    ForfeitRound,
    /// Abandon the game and zero every total.
    ResetGame,
}

impl From<BustChoice> for Action {
    fn from(choice: BustChoice) -> Self {
        match choice {
            BustChoice::ForfeitRound => Action::ForfeitRound,
            BustChoice::ResetGame => Action::ResetGame,
        }
    }
}

/// What a successful action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Dice were reset for a new round.
    RoundStarted,
    /// The roll left scoring dice; the player must now select.
    Rolled {
        /// Score of every non-locked die.
        available_score: u32,
    },
    /// The roll left nothing that scores.
    Bust(Bust),
    /// A die flipped between available and selected.
    DieToggled {
        /// Index of the die.
        index: usize,
        /// Its new state.
        state: DieState,
        /// Score of the current selection.
        selected_score: u32,
    },
    /// Selected dice were locked and their score banked.
    SelectionBanked {
        /// Points added to the round.
        banked: u32,
        /// Round score after banking.
        round_score: u32,
        /// True when all six dice are now locked.
        round_exhausted: bool,
    },
    /// The round score moved into the total.
    RoundEnded {
        /// Rounds completed so far.
        round_number: u32,
        /// Points moved into the total.
        banked: u32,
        /// Total score after banking.
        total_score: u32,
    },
    /// The round score was discarded.
    RoundForfeited {
        /// Rounds completed so far.
        round_number: u32,
        /// Points thrown away.
        forfeited: u32,
    },
    /// All counters were zeroed.
    GameReset,
}
