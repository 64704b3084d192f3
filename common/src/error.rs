//! Error types

use thiserror::Error;

/// Errors of a single backend call.
///
/// None of these is fatal; each failure is scoped to the action that
/// triggered it and leaves the client state untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DedupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned HTTP {0}")]
    Status(u16),

    #[error("Invalid response payload: {0}")]
    Decode(String),

    #[error("Missing page context value: {0}")]
    MissingContext(&'static str),
}

/// Result alias for backend calls.
pub type Result<T> = std::result::Result<T, DedupError>;
