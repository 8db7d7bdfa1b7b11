//! Telegram transport layer: teloxide update adapters, outbound Bot implementation, update dispatcher.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramUpdateWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_keyboard, TelegramBotAdapter};
pub use runner::run_dispatcher;
