//! Error types shared by the core and its collaborators.

use thiserror::Error;

/// Top-level error for chatai-bot collaborators (outbound transport, menu building).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Invalid menu button: {0}")]
    InvalidButton(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
