//! # Telegram bot application
//!
//! Wires the Telegram transport (teloxide) to the [`dispatcher::Router`]: loads config from env,
//! builds the session store, completion client and router, and runs the update dispatcher.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;
pub mod telegram;

pub use cli::{Cli, Commands};
pub use components::{
    build_bot_components, build_session_store, build_teloxide_bot, initialize_bot_components,
    BotComponents,
};
pub use config::{BaseConfig, BotConfig, SessionStoreType};
pub use runner::run_bot;
pub use telegram::{
    build_keyboard, run_dispatcher, TelegramBotAdapter, TelegramUpdateWrapper, TelegramUserWrapper,
};
