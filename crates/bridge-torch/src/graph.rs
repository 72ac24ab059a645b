//! Breadth-first construction of the full state-transition graph.
//!
//! Index 0 is always the start state and index 1 the end state; every other
//! state gets the next free index the first time it is reached. Crossings are
//! reversible, so each connection is stored on both endpoints with the same
//! time. A connection is recorded only while processing its lower-indexed
//! endpoint, which keeps every pair of states joined at most once.

use std::collections::HashMap;

use log::{debug, info, trace};
use smallvec::SmallVec;

use crate::config::{CrossingTime, CrossingTimes};
use crate::error::Result;
use crate::moves::{possible_moves, Crossers, Move};
use crate::state::{BridgeState, StateRepr};

pub const START_INDEX: usize = 0;
pub const END_INDEX: usize = 1;

/// Cap on the up-front reservation; wider puzzles grow on demand
const MAX_RESERVED_STATES: usize = 1 << 16;

/// Upper bound on reachable states for `people_count` people.
///
/// Of the `2^(n+1)` encodings, "everyone across with the torch left behind"
/// and "nobody across with the torch on the far side" cannot be reached.
pub fn max_possible_states(people_count: usize) -> u64 {
    (1u64 << (people_count + 1)) - 2
}

/// Edge to a neighbouring state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossing {
    /// Index of the state on the other end
    pub target: usize,
    pub time: CrossingTime,
    pub crossers: Crossers,
}

/// A discovered state and its adjacency list
#[derive(Debug, Clone)]
pub struct StateNode {
    pub state: BridgeState,
    pub crossings: SmallVec<[Crossing; 8]>,
}

impl StateNode {
    fn new(state: BridgeState) -> Self {
        Self {
            state,
            crossings: SmallVec::new(),
        }
    }
}

/// Every state reachable from the start, with all crossings between them
#[derive(Debug, Clone)]
pub struct BridgeGraph {
    nodes: Vec<StateNode>,
    state_to_index: HashMap<StateRepr, usize>,
    connection_count: usize,
    times: CrossingTimes,
}

impl BridgeGraph {
    /// Discover every state reachable from the start.
    ///
    /// States are processed in index order while new ones are appended, so
    /// the loop ends once the last discovered state has been expanded.
    pub fn build(times: &CrossingTimes) -> Result<Self> {
        let people_count = times.people_count();
        let start = BridgeState::start(people_count)?;
        let end = BridgeState::end(people_count)?;

        let max_states = max_possible_states(people_count);
        info!(
            "Building bridge graph for {} people (at most {} states)",
            people_count, max_states
        );

        let capacity = usize::try_from(max_states)
            .unwrap_or(usize::MAX)
            .min(MAX_RESERVED_STATES);

        let mut graph = Self {
            nodes: Vec::with_capacity(capacity),
            state_to_index: HashMap::with_capacity(capacity),
            connection_count: 0,
            times: times.clone(),
        };
        graph.insert_state(start);
        graph.insert_state(end);

        let mut current = START_INDEX;
        while current < graph.nodes.len() {
            let state = graph.nodes[current].state;
            for next in possible_moves(state, times)? {
                graph.add_or_connect(current, next);
            }
            current += 1;
        }

        debug!(
            "Recorded {} connections between {} states",
            graph.connection_count,
            graph.nodes.len()
        );
        info!("Bridge graph complete: {} states", graph.nodes.len());

        Ok(graph)
    }

    fn insert_state(&mut self, state: BridgeState) -> usize {
        let index = self.nodes.len();
        self.state_to_index.insert(state.repr(), index);
        self.nodes.push(StateNode::new(state));
        trace!("Discovered state [{}] at index {}", state, index);
        index
    }

    fn add_or_connect(&mut self, source: usize, next: Move) {
        let existing = self.state_to_index.get(&next.state.repr()).copied();
        let target = match existing {
            None => self.insert_state(next.state),
            Some(index) if index > source => index,
            // Already connected while `index` was processed
            Some(_) => return,
        };
        self.connect(source, target, next);
    }

    fn connect(&mut self, source: usize, target: usize, next: Move) {
        self.connection_count += 1;
        self.nodes[source].crossings.push(Crossing {
            target,
            time: next.time,
            crossers: next.crossers,
        });
        self.nodes[target].crossings.push(Crossing {
            target: source,
            time: next.time,
            crossers: next.crossers,
        });
    }

    /// Number of discovered states
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; start and end are present from the beginning
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct state pairs joined by a crossing
    pub fn connection_count(&self) -> usize {
        self.connection_count
    }

    pub fn people_count(&self) -> usize {
        self.times.people_count()
    }

    pub fn times(&self) -> &CrossingTimes {
        &self.times
    }

    pub fn nodes(&self) -> &[StateNode] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StateNode> {
        self.nodes.iter()
    }

    pub fn node(&self, index: usize) -> Option<&StateNode> {
        self.nodes.get(index)
    }

    pub fn state(&self, index: usize) -> Option<BridgeState> {
        self.nodes.get(index).map(|node| node.state)
    }

    pub fn crossings(&self, index: usize) -> Option<&[Crossing]> {
        self.nodes.get(index).map(|node| node.crossings.as_slice())
    }

    pub fn index_of(&self, state: BridgeState) -> Option<usize> {
        self.state_to_index.get(&state.repr()).copied()
    }

    pub fn start_index(&self) -> usize {
        START_INDEX
    }

    pub fn end_index(&self) -> usize {
        END_INDEX
    }

    pub fn start(&self) -> BridgeState {
        self.nodes[START_INDEX].state
    }

    pub fn end(&self) -> BridgeState {
        self.nodes[END_INDEX].state
    }
}

impl<'a> IntoIterator for &'a BridgeGraph {
    type Item = &'a StateNode;
    type IntoIter = std::slice::Iter<'a, StateNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
