//! Sources of die faces.
//!
//! Rolling is the engine's only nondeterminism, so it goes through the
//! [`DiceSource`] trait. Play uses [`SeededDice`]; tests and replays use
//! [`ScriptedDice`].

use crate::types::Face;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Produces die faces for a roll.
pub trait DiceSource: std::fmt::Debug {
    /// Returns the next face, uniform over 1-6 for random sources.
    fn roll_face(&mut self) -> Face;
}

impl<D: DiceSource + ?Sized> DiceSource for Box<D> {
    fn roll_face(&mut self) -> Face {
        (**self).roll_face()
    }
}

/// Pseudo-random dice backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: StdRng,
}

impl SeededDice {
    /// Deterministic dice for a given seed.
    #[instrument]
    pub fn from_seed(seed: u64) -> Self {
        debug!(seed, "Seeding dice");
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Dice seeded from operating system entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl DiceSource for SeededDice {
    fn roll_face(&mut self) -> Face {
        let value: u8 = self.rng.gen_range(1..=6);
        Face::ALL[usize::from(value - 1)]
    }
}

/// Error building a dice script.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DiceError {
    /// A script needs at least one face.
    #[display("Dice script is empty")]
    EmptyScript,
    /// A scripted value outside 1-6.
    #[display("Invalid die face {} (must be 1-6)", _0)]
    InvalidFace(u8),
}

impl std::error::Error for DiceError {}

/// Replays a fixed sequence of faces, starting over when it runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedDice {
    faces: Vec<Face>,
    next: usize,
}

impl ScriptedDice {
    /// Builds a script from faces.
    pub fn new(faces: Vec<Face>) -> Result<Self, DiceError> {
        if faces.is_empty() {
            return Err(DiceError::EmptyScript);
        }
        Ok(Self { faces, next: 0 })
    }

    /// Builds a script from pip values (1-6).
    #[instrument]
    pub fn from_values(values: &[u8]) -> Result<Self, DiceError> {
        let faces = values
            .iter()
            .map(|&v| Face::from_value(v).ok_or(DiceError::InvalidFace(v)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(faces)
    }
}

impl DiceSource for ScriptedDice {
    fn roll_face(&mut self) -> Face {
        let face = self.faces[self.next];
        self.next = (self.next + 1) % self.faces.len();
        face
    }
}
