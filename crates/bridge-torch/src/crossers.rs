//! People allowed to cross from a given state.
//!
//! Only people standing on the same side as the torch may cross.

use crate::state::{BridgeState, StateRepr};

/// Bitmask over person indices, bit `i` set for person `i`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CrosserSet(StateRepr);

impl CrosserSet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn from_bits(bits: StateRepr) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> StateRepr {
        self.0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, person: usize) -> bool {
        person < StateRepr::BITS as usize && self.0 & (1 << person) != 0
    }

    /// Members with an index strictly greater than `person`
    pub fn above(self, person: usize) -> Self {
        if person + 1 >= StateRepr::BITS as usize {
            return Self::empty();
        }
        Self(self.0 & (StateRepr::MAX << (person + 1)))
    }

    /// Member indices in ascending order
    pub fn iter(self) -> CrosserIter {
        CrosserIter(self.0)
    }
}

impl IntoIterator for CrosserSet {
    type Item = usize;
    type IntoIter = CrosserIter;

    fn into_iter(self) -> CrosserIter {
        self.iter()
    }
}

/// Iterator over the indices of a [`CrosserSet`]
#[derive(Debug, Clone)]
pub struct CrosserIter(StateRepr);

impl Iterator for CrosserIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let person = self.0.trailing_zeros() as usize;
        // Clear lowest set bit
        self.0 &= self.0 - 1;
        Some(person)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.0.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CrosserIter {}

/// People on the same side as the torch in `state`.
///
/// The person field is masked to the bits below the sentinel before it is
/// inverted, so the sentinel never shows up as a crosser.
pub fn eligible_crossers(state: BridgeState) -> CrosserSet {
    let people = state.repr() >> 1;
    let people_mask: StateRepr = (1 << (state.leading_one_pos() - 1)) - 1;

    let mut crossers = people & people_mask;
    if !state.torch_crossed() {
        crossers ^= people_mask;
    }

    CrosserSet(crossers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MAX_PEOPLE;

    #[test]
    fn test_everyone_eligible_at_start() {
        for n in 1..=MAX_PEOPLE {
            let crossers = eligible_crossers(BridgeState::start(n).unwrap());
            assert_eq!(crossers.len(), n);
            assert_eq!(crossers.iter().collect::<Vec<_>>(), (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_nobody_eligible_at_end() {
        for n in 1..=MAX_PEOPLE {
            assert!(eligible_crossers(BridgeState::end(n).unwrap()).is_empty());
        }
    }

    #[test]
    fn test_eligible_follow_the_torch() {
        let start = BridgeState::start(4).unwrap();

        // 0 and 2 are now on the far side with the torch
        let state = start.after_double_crossing(0, 2).unwrap();
        assert_eq!(eligible_crossers(state).iter().collect::<Vec<_>>(), vec![0, 2]);

        // 0 brings the torch back, leaving 2 on the far side
        let state = state.after_single_crossing(0).unwrap();
        assert_eq!(eligible_crossers(state).iter().collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    #[test]
    fn test_torch_alone_on_empty_side() {
        // Torch on the far side but nobody there
        let state: BridgeState = "000 1".parse().unwrap();
        assert!(eligible_crossers(state).is_empty());
    }

    #[test]
    fn test_above() {
        let set = CrosserSet::from_bits(0b1011_0101);
        assert_eq!(set.above(0).iter().collect::<Vec<_>>(), vec![2, 4, 5, 7]);
        assert_eq!(set.above(4).iter().collect::<Vec<_>>(), vec![5, 7]);
        assert!(set.above(7).is_empty());
        assert!(set.above(StateRepr::BITS as usize - 1).is_empty());
        assert!(set.contains(5));
        assert!(!set.contains(1));
    }
}
