//! Core domain types for Farkle dice.

use crate::action::ActionError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of dice in play each round.
pub const DICE_COUNT: usize = 6;

/// A die face (1-6).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Face {
    /// One pip.
    One,
    /// Two pips.
    Two,
    /// Three pips.
    Three,
    /// Four pips.
    Four,
    /// Five pips.
    Five,
    /// Six pips.
    Six,
}

impl Face {
    /// All six faces in ascending order.
    pub const ALL: [Face; 6] = [
        Face::One,
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
    ];

    /// Creates a face from its pip count, or `None` outside 1-6.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Face::One),
            2 => Some(Face::Two),
            3 => Some(Face::Three),
            4 => Some(Face::Four),
            5 => Some(Face::Five),
            6 => Some(Face::Six),
            _ => None,
        }
    }

    /// Returns the pip count (1-6).
    pub fn value(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Zero-based index of this face (0-5).
    pub fn index(self) -> usize {
        match self {
            Face::One => 0,
            Face::Two => 1,
            Face::Three => 2,
            Face::Four => 3,
            Face::Five => 4,
            Face::Six => 5,
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Scoring eligibility of a die.
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
)]
pub enum DieState {
    /// Free to be rolled or selected.
    #[default]
    Available,
    /// Picked for the next bank, still re-rolled.
    Selected,
    /// Banked this round; frozen until the round resets.
    Locked,
}

/// A single die: its face and its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    face: Face,
    state: DieState,
}

impl Die {
    /// Creates an available die showing `face`.
    pub fn new(face: Face) -> Self {
        Self {
            face,
            state: DieState::Available,
        }
    }

    /// Returns the face shown.
    pub fn face(&self) -> Face {
        self.face
    }

    /// Returns the die state.
    pub fn state(&self) -> DieState {
        self.state
    }

    /// True unless the die is locked.
    pub fn is_rollable(&self) -> bool {
        self.state != DieState::Locked
    }

    pub(crate) fn set_face(&mut self, face: Face) {
        self.face = face;
    }

    pub(crate) fn set_state(&mut self, state: DieState) {
        self.state = state;
    }
}

/// The six dice of a round, in a fixed order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice {
    dice: [Die; DICE_COUNT],
}

impl Dice {
    /// Fresh pre-roll dice: faces 1 through 6, all available.
    pub fn new() -> Self {
        Self {
            dice: Face::ALL.map(Die::new),
        }
    }

    /// Builds dice from explicit records.
    pub fn from_dice(dice: [Die; DICE_COUNT]) -> Self {
        Self { dice }
    }

    /// Gets the die at `index` (0-5).
    #[instrument(skip(self))]
    pub fn get(&self, index: usize) -> Result<&Die, ActionError> {
        self.dice.get(index).ok_or(ActionError::InvalidDieIndex(index))
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Result<&mut Die, ActionError> {
        self.dice
            .get_mut(index)
            .ok_or(ActionError::InvalidDieIndex(index))
    }

    /// Returns all dice.
    pub fn as_array(&self) -> &[Die; DICE_COUNT] {
        &self.dice
    }

    /// Iterates over the dice in order.
    pub fn iter(&self) -> impl Iterator<Item = &Die> {
        self.dice.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Die> {
        self.dice.iter_mut()
    }

    /// Faces of every die in `state`.
    pub fn faces_in(&self, state: DieState) -> Vec<Face> {
        self.dice
            .iter()
            .filter(|d| d.state == state)
            .map(|d| d.face)
            .collect()
    }

    /// Faces of every die that is not locked.
    pub fn rollable_faces(&self) -> Vec<Face> {
        self.dice
            .iter()
            .filter(|d| d.is_rollable())
            .map(|d| d.face)
            .collect()
    }

    /// Number of dice in `state`.
    pub fn count_in(&self, state: DieState) -> usize {
        self.dice.iter().filter(|d| d.state == state).count()
    }

    /// True when all six dice are locked.
    pub fn all_locked(&self) -> bool {
        self.count_in(DieState::Locked) == DICE_COUNT
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_values_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_value(face.value()), Some(face));
        }
        assert_eq!(Face::from_value(0), None);
        assert_eq!(Face::from_value(7), None);
    }

    #[test]
    fn test_fresh_dice_show_one_through_six() {
        let dice = Dice::new();
        let values: Vec<u8> = dice.iter().map(|d| d.face().value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(dice.count_in(DieState::Available), DICE_COUNT);
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let dice = Dice::new();
        assert!(dice.get(5).is_ok());
        assert_eq!(dice.get(6), Err(ActionError::InvalidDieIndex(6)));
    }
}
