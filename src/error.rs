//! Error types for trueno-rank
//!
//! Toyota Way: Clear error messages with actionable guidance (Respect for People)

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// trueno-rank error types
#[derive(Error, Debug)]
pub enum Error {
    /// `next_entity()` was called on a source with nothing remaining
    #[error("Entity source exhausted: next_entity() called with 0 remaining\nCheck remaining() before pulling the next entity")]
    SourceExhausted,

    /// Reporting interval of zero or below (would divide by zero at every milestone)
    ///
    /// Signed so that negative intervals read from configuration are reported
    /// as given.
    #[error("Invalid reporting interval: {0}\nThe interval must be a positive number of entities")]
    InvalidInterval(i64),

    /// Invalid input (malformed configuration, etc.)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
