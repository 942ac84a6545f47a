//! Error types for lesson-layout operations.
//!
//! The layout engine itself is total over well-formed input; these errors are
//! raised only by the validation boundary and the day bucketing in front of it.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid interval for event {id}: end {end} is not after start {start}")]
    InvalidInterval {
        id: String,
        start: String,
        end: String,
    },

    #[error("Duplicate event id: {0}")]
    DuplicateId(String),

    #[error("Event {id} spans more than one day ({start} to {end})")]
    SpansMultipleDays {
        id: String,
        start: String,
        end: String,
    },
}

pub type Result<T> = std::result::Result<T, LayoutError>;
