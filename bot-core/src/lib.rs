//! # bot-core
//!
//! Transport-agnostic core of chatai-bot: chat/session/update types, the update classifier,
//! fixed command, menu and reply tables, the outbound [`Bot`] trait and tracing initialization.
//! Used by storage, dispatcher and telegram-bot.

pub mod bot;
pub mod classify;
pub mod commands;
pub mod error;
pub mod logger;
pub mod replies;
pub mod types;

pub use bot::Bot;
pub use classify::{classify, COMMAND_PREFIX};
pub use commands::{Command, MenuEntry};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use replies::Reply;
pub use types::{
    ButtonKind, ChatIdentity, ChatSession, ChatState, MenuButton, RawCallback, RawMessage,
    RawUpdate, Sender, Update, UserProfile,
};
