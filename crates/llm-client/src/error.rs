//! Completion client errors.

use thiserror::Error;

/// Failure of a completion call. The `Display` text is short enough to show to the user.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("invalid request: {0}")]
    Request(String),

    #[error("request timed out")]
    Timeout,

    #[error("{0}")]
    Remote(String),
}
