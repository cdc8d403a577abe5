//! Kani arbitrary implementations for Farkle types.

#[cfg(kani)]
use super::{Die, DieState, Face};

#[cfg(kani)]
impl kani::Arbitrary for Face {
    fn any() -> Self {
        let value: u8 = kani::any();
        kani::assume((1..=6).contains(&value));
        match Face::from_value(value) {
            Some(face) => face,
            None => unreachable!(),
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for DieState {
    fn any() -> Self {
        let tag: u8 = kani::any();
        kani::assume(tag < 3);
        match tag {
            0 => DieState::Available,
            1 => DieState::Selected,
            _ => DieState::Locked,
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Die {
    fn any() -> Self {
        let mut die = Die::new(kani::any());
        die.set_state(kani::any());
        die
    }
}
