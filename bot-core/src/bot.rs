//! Outbound messaging abstraction.
//!
//! [`Bot`] is transport-agnostic; telegram-bot implements it via teloxide and tests substitute a recorder.

use crate::error::Result;
use crate::types::{ChatIdentity, MenuButton};
use async_trait::async_trait;

/// Sends text and button menus to a chat. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: ChatIdentity, text: &str) -> Result<()>;

    /// Sends `header` with an inline keyboard: one button per row, in the given order.
    async fn send_menu(&self, chat: ChatIdentity, header: &str, buttons: &[MenuButton]) -> Result<()>;
}
