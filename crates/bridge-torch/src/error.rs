//! Error types shared by the codec, the move generator and the graph builder.
//!
//! Every failure here is an input-validation failure. None of them are
//! transient, so callers should not retry with the same arguments.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("people count is out of range. is {count}. should be in range [{min}, {max}].")]
    InvalidPeopleCount { count: usize, min: usize, max: usize },

    #[error("crosser index is out of range. is {index}. should be in range [0, {people_count}).")]
    InvalidCrosserIndex { index: usize, people_count: usize },

    #[error("first and second crosser indices are both {index}. should be distinct.")]
    DuplicateCrosserIndices { index: usize },

    #[error("crossing time of person {person} is {time}. should be positive.")]
    InvalidCrossingTime { person: usize, time: u32 },

    #[error("invalid state display form {input:?}: {reason}")]
    InvalidDisplayForm { input: String, reason: &'static str },

    #[error("could not read crossing times: {0}")]
    Config(String),
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Config(err.to_string())
    }
}
