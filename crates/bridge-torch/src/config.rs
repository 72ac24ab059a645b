//! Crossing-time input.
//!
//! The JSON form is `{ "times": [1, 10, 100, 1000] }`; the position of a time
//! in the list is the index of the person it belongs to.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};
use crate::state::{MAX_PEOPLE, MIN_PEOPLE};

/// Time one person needs to cross, in whatever unit the caller uses
pub type CrossingTime = u32;

/// Raw input document, before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub times: Vec<CrossingTime>,
}

impl BridgeConfig {
    pub fn validate(self) -> Result<CrossingTimes> {
        CrossingTimes::new(self.times)
    }
}

/// Validated crossing times, one per person
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossingTimes(Vec<CrossingTime>);

impl CrossingTimes {
    pub fn new(times: Vec<CrossingTime>) -> Result<Self> {
        if !(MIN_PEOPLE..=MAX_PEOPLE).contains(&times.len()) {
            return Err(BridgeError::InvalidPeopleCount {
                count: times.len(),
                min: MIN_PEOPLE,
                max: MAX_PEOPLE,
            });
        }
        if let Some(person) = times.iter().position(|&time| time == 0) {
            return Err(BridgeError::InvalidCrossingTime {
                person,
                time: times[person],
            });
        }
        Ok(Self(times))
    }

    /// Parse a `BridgeConfig` JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BridgeConfig = serde_json::from_str(json)?;
        config.validate()
    }

    pub fn people_count(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, person: usize) -> Option<CrossingTime> {
        self.0.get(person).copied()
    }

    pub fn as_slice(&self) -> &[CrossingTime] {
        &self.0
    }
}

impl TryFrom<Vec<CrossingTime>> for CrossingTimes {
    type Error = BridgeError;

    fn try_from(times: Vec<CrossingTime>) -> Result<Self> {
        Self::new(times)
    }
}

impl FromStr for CrossingTimes {
    type Err = BridgeError;

    /// Comma-separated list, e.g. `1,10,100,1000`
    fn from_str(input: &str) -> Result<Self> {
        let times = input
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<CrossingTime>()
                    .map_err(|e| BridgeError::Config(format!("bad time {:?}: {}", part.trim(), e)))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(times)
    }
}
