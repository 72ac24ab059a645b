//! Bit-packed puzzle state.
//!
//! A state is a single unsigned word of the form `0…0 1 p(n-1) … p1 p0 t`,
//! read from the high end:
//!
//! - unused high bits are zero,
//! - a sentinel one marks the width of the word, so the person count can be
//!   recovered from the value alone,
//! - `p(i)` is set when person `i` is on the far side,
//! - `t` is set when the torch is on the far side.

use std::fmt;
use std::str::FromStr;

use crate::error::{BridgeError, Result};

/// Underlying integer type of an encoded state
pub type StateRepr = u32;

pub const MIN_PEOPLE: usize = 1;
/// Two bits of the word are taken by the torch and the sentinel
pub const MAX_PEOPLE: usize = StateRepr::BITS as usize - 2;

const TORCH_BIT: StateRepr = 1;

/// Bit of person `person`, offset by one for the torch bit
#[inline]
fn person_bit(person: usize) -> StateRepr {
    1 << (person + 1)
}

fn validate_people_count(people_count: usize) -> Result<()> {
    if !(MIN_PEOPLE..=MAX_PEOPLE).contains(&people_count) {
        return Err(BridgeError::InvalidPeopleCount {
            count: people_count,
            min: MIN_PEOPLE,
            max: MAX_PEOPLE,
        });
    }
    Ok(())
}

/// One configuration of the puzzle: who has crossed and where the torch is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BridgeState(StateRepr);

impl BridgeState {
    /// Everyone and the torch on the start side.
    pub fn start(people_count: usize) -> Result<Self> {
        validate_people_count(people_count)?;
        Ok(Self(1 << (people_count + 1)))
    }

    /// Everyone and the torch on the far side.
    pub fn end(people_count: usize) -> Result<Self> {
        validate_people_count(people_count)?;
        // Built from the sentinel down so MAX_PEOPLE does not shift past the word
        let sentinel: StateRepr = 1 << (people_count + 1);
        Ok(Self(sentinel | (sentinel - 1)))
    }

    /// State after `crosser` walks over the bridge with the torch.
    pub fn after_single_crossing(self, crosser: usize) -> Result<Self> {
        self.validate_crosser_index(crosser)?;
        Ok(Self(self.0 ^ TORCH_BIT ^ person_bit(crosser)))
    }

    /// State after `first` and `second` walk over the bridge together with the torch.
    pub fn after_double_crossing(self, first: usize, second: usize) -> Result<Self> {
        self.validate_crosser_index(first)?;
        self.validate_crosser_index(second)?;
        if first == second {
            return Err(BridgeError::DuplicateCrosserIndices { index: first });
        }
        Ok(Self(
            self.0 ^ TORCH_BIT ^ person_bit(first) ^ person_bit(second),
        ))
    }

    /// Raw encoded value
    pub fn repr(self) -> StateRepr {
        self.0
    }

    /// Number of people, recovered from the sentinel bit
    pub fn people_count(self) -> usize {
        self.leading_one_pos() - 1
    }

    pub fn torch_crossed(self) -> bool {
        self.0 & TORCH_BIT == TORCH_BIT
    }

    /// Whether `person` stands on the far side
    pub fn has_crossed(self, person: usize) -> Result<bool> {
        self.validate_crosser_index(person)?;
        Ok(self.0 & person_bit(person) != 0)
    }

    /// People bits, a space, then the torch bit; highest person first.
    pub fn display_form(self) -> String {
        self.to_string()
    }

    /// Position of the sentinel bit
    pub(crate) fn leading_one_pos(self) -> usize {
        (StateRepr::BITS - 1 - self.0.leading_zeros()) as usize
    }

    fn validate_crosser_index(self, crosser: usize) -> Result<()> {
        let people_count = self.people_count();
        if crosser >= people_count {
            return Err(BridgeError::InvalidCrosserIndex {
                index: crosser,
                people_count,
            });
        }
        Ok(())
    }
}

impl fmt::Display for BridgeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for person in (0..self.people_count()).rev() {
            let bit = if self.0 & person_bit(person) != 0 { "1" } else { "0" };
            f.write_str(bit)?;
        }
        write!(f, " {}", self.0 & TORCH_BIT)
    }
}

impl FromStr for BridgeState {
    type Err = BridgeError;

    /// Parses the output of [`BridgeState::display_form`].
    fn from_str(input: &str) -> Result<Self> {
        let invalid = |reason| BridgeError::InvalidDisplayForm {
            input: input.to_string(),
            reason,
        };

        let (people, torch) = input
            .split_once(' ')
            .ok_or_else(|| invalid("missing separator between people and torch bits"))?;

        if !(MIN_PEOPLE..=MAX_PEOPLE).contains(&people.len()) {
            return Err(invalid("people bit count is out of range"));
        }

        let mut repr: StateRepr = 1 << (people.len() + 1);
        for (person, bit) in people.bytes().rev().enumerate() {
            match bit {
                b'0' => {}
                b'1' => repr |= person_bit(person),
                _ => return Err(invalid("people bits must be 0 or 1")),
            }
        }

        match torch {
            "0" => {}
            "1" => repr |= TORCH_BIT,
            _ => return Err(invalid("torch bit must be 0 or 1")),
        }

        Ok(Self(repr))
    }
}
