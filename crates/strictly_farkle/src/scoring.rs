//! Dice scoring.
//!
//! Each face is scored on its own from the number of times it appears:
//! fewer than three copies score the face's single value per die, three or
//! more score the face's triple value once per die beyond the second.
//! There are no straights, pairs, or multi-triple combinations.

use crate::types::{DICE_COUNT, Face};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// One value per face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceValues {
    /// Value for ones.
    pub ones: u32,
    /// Value for twos.
    pub twos: u32,
    /// Value for threes.
    pub threes: u32,
    /// Value for fours.
    pub fours: u32,
    /// Value for fives.
    pub fives: u32,
    /// Value for sixes.
    pub sixes: u32,
}

impl FaceValues {
    /// Returns the value for `face`.
    pub fn for_face(&self, face: Face) -> u32 {
        match face {
            Face::One => self.ones,
            Face::Two => self.twos,
            Face::Three => self.threes,
            Face::Four => self.fours,
            Face::Five => self.fives,
            Face::Six => self.sixes,
        }
    }
}

/// Point table used to score a set of dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Points per die when a face shows fewer than three times.
    pub single: FaceValues,
    /// Points for three of a face, and again for each further copy.
    pub triple: FaceValues,
}

impl ScoringRules {
    /// Minimum copies of a face that switch it to triple scoring.
    pub const TRIPLE_THRESHOLD: u32 = 3;

    /// The standard table: single 1 = 100, single 5 = 50, triples worth
    /// 1000, 200, 300, 400, 500, 600.
    pub const STANDARD: ScoringRules = ScoringRules {
        single: FaceValues {
            ones: 100,
            twos: 0,
            threes: 0,
            fours: 0,
            fives: 50,
            sixes: 0,
        },
        triple: FaceValues {
            ones: 1000,
            twos: 200,
            threes: 300,
            fours: 400,
            fives: 500,
            sixes: 600,
        },
    };

    /// Scores a collection of faces. Order does not matter; empty input scores 0.
    ///
    /// Saturates at `u32::MAX` instead of overflowing.
    #[instrument(skip(self, faces))]
    pub fn score<I>(&self, faces: I) -> u32
    where
        I: IntoIterator<Item = Face>,
    {
        let counts = count_faces(faces);
        let total = Face::ALL
            .iter()
            .map(|&face| self.score_face(face, counts[face.index()]))
            .fold(0u32, u32::saturating_add);
        trace!(?counts, total, "Scored dice");
        total
    }

    /// Highest score a single throw of all six dice can reach.
    ///
    /// Computed in `u64` so tables too large for the engine's counters can
    /// be detected before play.
    pub fn highest_roll(&self) -> u64 {
        // best[n]: highest score using exactly n dice over the faces seen so far
        let mut best: [Option<u64>; DICE_COUNT + 1] = [None; DICE_COUNT + 1];
        best[0] = Some(0);
        for face in Face::ALL {
            let mut next = [None; DICE_COUNT + 1];
            for (used, score) in best.iter().enumerate() {
                let Some(score) = score else { continue };
                for count in 0..=DICE_COUNT - used {
                    let total = score + self.score_face_wide(face, count as u64);
                    let slot = &mut next[used + count];
                    *slot = Some(slot.map_or(total, |s: u64| s.max(total)));
                }
            }
            best = next;
        }
        best[DICE_COUNT].unwrap_or(0)
    }

    fn score_face(&self, face: Face, count: u32) -> u32 {
        if count < Self::TRIPLE_THRESHOLD {
            count.saturating_mul(self.single.for_face(face))
        } else {
            (count - 2).saturating_mul(self.triple.for_face(face))
        }
    }

    fn score_face_wide(&self, face: Face, count: u64) -> u64 {
        if count < u64::from(Self::TRIPLE_THRESHOLD) {
            count * u64::from(self.single.for_face(face))
        } else {
            (count - 2) * u64::from(self.triple.for_face(face))
        }
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Scores faces with the standard table.
pub fn score<I>(faces: I) -> u32
where
    I: IntoIterator<Item = Face>,
{
    ScoringRules::STANDARD.score(faces)
}

fn count_faces<I>(faces: I) -> [u32; 6]
where
    I: IntoIterator<Item = Face>,
{
    let mut counts = [0u32; 6];
    for face in faces {
        let count = &mut counts[face.index()];
        *count = count.saturating_add(1);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn faces(values: &[u8]) -> Vec<Face> {
        values
            .iter()
            .map(|&v| Face::from_value(v).expect("test face in range"))
            .collect()
    }

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(score(Vec::<Face>::new()), 0);
    }

    #[test]
    fn test_singles() {
        assert_eq!(score(faces(&[1])), 100);
        assert_eq!(score(faces(&[5])), 50);
        assert_eq!(score(faces(&[2])), 0);
        assert_eq!(score(faces(&[1, 1, 5, 5])), 300);
    }

    #[test]
    fn test_triples_and_extra_dice() {
        assert_eq!(score(faces(&[1, 1, 1])), 1000);
        assert_eq!(score(faces(&[1, 1, 1, 1])), 2000);
        assert_eq!(score(faces(&[5, 5, 5])), 500);
        assert_eq!(score(faces(&[2, 2, 2])), 200);
        assert_eq!(score(faces(&[6, 6, 6, 6])), 1200);
        assert_eq!(score(faces(&[4, 4, 4, 4])), 800);
    }

    #[test]
    fn test_pairs_of_non_scoring_faces_are_worthless() {
        assert_eq!(score(faces(&[2, 2, 3, 3, 4, 4])), 0);
        assert_eq!(score(faces(&[6, 6])), 0);
    }

    #[test]
    fn test_no_straight_bonus() {
        assert_eq!(score(faces(&[1, 2, 3, 4, 6])), 100);
        assert_eq!(score(faces(&[1, 2, 3, 4, 5, 6])), 150);
    }

    #[test]
    fn test_six_of_a_kind_uses_linear_formula() {
        for face in Face::iter() {
            let expected = 4 * ScoringRules::STANDARD.triple.for_face(face);
            assert_eq!(score(vec![face; 6]), expected, "six of {face}");
        }
    }

    #[test]
    fn test_order_independent() {
        let forward = faces(&[1, 5, 3, 1, 1, 5]);
        let mut reversed = forward.clone();
        reversed.reverse();
        let mut sorted = forward.clone();
        sorted.sort();
        assert_eq!(score(forward.clone()), score(reversed));
        assert_eq!(score(forward), score(sorted));
    }

    #[test]
    fn test_custom_rules() {
        let mut rules = ScoringRules::STANDARD;
        rules.single.sixes = 10;
        assert_eq!(rules.score(faces(&[6, 6])), 20);
        assert_eq!(rules.score(faces(&[6, 6, 6])), 600);
    }

    #[test]
    fn test_long_input_saturates() {
        assert_eq!(score(vec![Face::One; 5_000_000]), u32::MAX);
    }

    #[test]
    fn test_huge_table_saturates() {
        let mut rules = ScoringRules::STANDARD;
        rules.triple.ones = 2_000_000_000;
        rules.single.fives = u32::MAX;
        assert_eq!(rules.score(vec![Face::One; 6]), u32::MAX);
        assert_eq!(rules.score(faces(&[5, 5, 2])), u32::MAX);
        assert_eq!(rules.score(faces(&[1, 1, 1])), 2_000_000_000);
    }

    #[test]
    fn test_highest_roll() {
        assert_eq!(ScoringRules::STANDARD.highest_roll(), 4000);

        let mut rules = ScoringRules::STANDARD;
        rules.triple.ones = 2_000_000_000;
        assert_eq!(rules.highest_roll(), 8_000_000_000);

        // pairs of singles beat six of a kind
        let zero = FaceValues {
            ones: 0,
            twos: 0,
            threes: 0,
            fours: 0,
            fives: 0,
            sixes: 0,
        };
        let mut rules = ScoringRules {
            single: zero,
            triple: zero,
        };
        rules.single.ones = 1000;
        rules.single.fives = 1000;
        assert_eq!(rules.highest_roll(), 4000);
    }
}
