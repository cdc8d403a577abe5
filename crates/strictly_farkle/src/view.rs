//! Read-only projection of the engine for hosts to render.

use crate::phase::GamePhase;
use crate::state::TurnState;
use crate::types::{DICE_COUNT, Die};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Which player controls are currently enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Controls {
    /// Rolling is allowed.
    pub can_roll: bool,
    /// Banking the selection is allowed.
    pub can_bank: bool,
    /// Ending the round is offered.
    pub can_end_round: bool,
}

/// Snapshot of everything a host displays.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TurnView {
    phase: GamePhase,
    dice: [Die; DICE_COUNT],
    selected_score: u32,
    round_score: u32,
    total_score: u32,
    round_number: u32,
    controls: Controls,
}

impl TurnView {
    pub(crate) fn new(state: &TurnState, controls: Controls) -> Self {
        Self {
            phase: state.phase(),
            dice: *state.dice().as_array(),
            selected_score: state.selected_score(),
            round_score: state.round_score(),
            total_score: state.total_score(),
            round_number: state.round_number(),
            controls,
        }
    }
}
