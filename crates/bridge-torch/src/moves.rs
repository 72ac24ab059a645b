//! Legal crossings out of a state.
//!
//! A move is one or two eligible people walking over with the torch. A pair
//! walks at the pace of its slower member.

use smallvec::SmallVec;

use crate::config::{CrossingTime, CrossingTimes};
use crate::crossers::eligible_crossers;
use crate::error::{BridgeError, Result};
use crate::state::BridgeState;

/// Who walks over the bridge in a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crossers {
    Single(usize),
    /// First index is always the lower one
    Double(usize, usize),
}

impl Crossers {
    /// State reached by this crossing from `state`
    pub fn apply(self, state: BridgeState) -> Result<BridgeState> {
        match self {
            Crossers::Single(person) => state.after_single_crossing(person),
            Crossers::Double(first, second) => state.after_double_crossing(first, second),
        }
    }

    /// Time taken; the slower of a pair sets the pace
    pub fn time(self, times: &CrossingTimes) -> Result<CrossingTime> {
        match self {
            Crossers::Single(person) => person_time(times, person),
            Crossers::Double(first, second) => {
                Ok(person_time(times, first)?.max(person_time(times, second)?))
            }
        }
    }
}

/// A candidate transition: who crossed, where it leads and what it costs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub crossers: Crossers,
    pub state: BridgeState,
    pub time: CrossingTime,
}

/// Moves out of one state; 4 people give at most 10
pub type Moves = SmallVec<[Move; 16]>;

fn person_time(times: &CrossingTimes, person: usize) -> Result<CrossingTime> {
    times.get(person).ok_or(BridgeError::InvalidCrosserIndex {
        index: person,
        people_count: times.people_count(),
    })
}

fn make_move(state: BridgeState, crossers: Crossers, times: &CrossingTimes) -> Result<Move> {
    Ok(Move {
        crossers,
        state: crossers.apply(state)?,
        time: crossers.time(times)?,
    })
}

/// All single crossings followed by all double crossings out of `state`.
///
/// Each unordered pair appears once. A state with nobody beside the torch
/// yields no moves.
pub fn possible_moves(state: BridgeState, times: &CrossingTimes) -> Result<Moves> {
    let eligible = eligible_crossers(state);
    let mut moves = Moves::new();

    for person in eligible {
        moves.push(make_move(state, Crossers::Single(person), times)?);
    }

    for first in eligible {
        for second in eligible.above(first) {
            moves.push(make_move(state, Crossers::Double(first, second), times)?);
        }
    }

    Ok(moves)
}
