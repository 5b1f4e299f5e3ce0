//! Error types for recall-core.

use thiserror::Error;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that can occur while driving a study session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("invalid difficulty value: {0} (expected 0, 1 or 2)")]
    InvalidDifficulty(i32),

    #[error("no card is currently presented (session is {state})")]
    NotActive { state: &'static str },
}
