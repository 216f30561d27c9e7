//! Error types for availability resolution.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    /// The supplied string could not be parsed as a calendar date.
    ///
    /// This is the engine's only hard failure. Every "nothing found"
    /// condition (no pattern, no exception, empty range) resolves to a
    /// zero/false/empty value instead.
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, AvailabilityError>;
