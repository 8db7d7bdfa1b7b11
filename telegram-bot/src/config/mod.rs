//! Bot configuration: BaseConfig (Telegram + log + session store) + LLM config from llm-client.

mod base;
mod bot_config;

#[cfg(test)]
mod tests;

pub use base::{BaseConfig, SessionStoreType};
pub use bot_config::BotConfig;
