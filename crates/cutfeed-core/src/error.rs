//! Error handling for cutfeed
//!
//! Errors raised while building core values from untrusted input, such as
//! part-limit assignments (`NAME=N`).
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A `NAME=N` limit assignment could not be parsed
    #[error("Invalid limit assignment '{assignment}': {reason}")]
    InvalidLimitAssignment {
        /// The rejected assignment text.
        assignment: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
