//! State-space graph for the generalized bridge and torch puzzle.
//!
//! N people with distinct crossing times must cross a bridge at night, at
//! most two at a time, carrying a single torch. This crate enumerates every
//! configuration reachable from the start and connects them with the
//! crossings that lead from one to another.

pub mod config;
pub mod crossers;
pub mod error;
pub mod graph;
pub mod moves;
pub mod state;

// Re-export main types
pub use config::{BridgeConfig, CrossingTime, CrossingTimes};
pub use crossers::{eligible_crossers, CrosserSet};
pub use error::{BridgeError, Result};
pub use graph::{max_possible_states, BridgeGraph, Crossing, StateNode, END_INDEX, START_INDEX};
pub use moves::{possible_moves, Crossers, Move, Moves};
pub use state::{BridgeState, StateRepr, MAX_PEOPLE, MIN_PEOPLE};
