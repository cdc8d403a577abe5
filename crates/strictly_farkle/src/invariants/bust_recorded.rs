//! Bust invariant: a bust phase always carries its notification.

use super::Invariant;
use crate::{GamePhase, TurnState};

/// Invariant: a pending bust is recorded exactly while in the bust phase,
/// and the rolled dice really score nothing.
pub struct BustRecordedInvariant;

impl Invariant<TurnState> for BustRecordedInvariant {
    fn holds(state: &TurnState) -> bool {
        match (state.phase(), state.bust()) {
            (GamePhase::Bust, Some(_)) => state.available_score() == 0,
            (GamePhase::Bust, None) => false,
            (_, bust) => bust.is_none(),
        }
    }

    fn description() -> &'static str {
        "Bust phase carries a bust with no available score"
    }
}
