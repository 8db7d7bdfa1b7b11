//! Base config: Telegram Bot connection, logging, session store. Loaded from env.

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "./chatai_bot.db";
pub const DEFAULT_LOG_FILE: &str = "logs/chatai-bot.log";

/// Backend for user profiles and chat sessions (SESSION_STORE_TYPE).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStoreType {
    Sqlite,
    Memory,
}

impl FromStr for SessionStoreType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(SessionStoreType::Sqlite),
            "memory" => Ok(SessionStoreType::Memory),
            other => anyhow::bail!("SESSION_STORE_TYPE must be sqlite or memory, got {:?}", other),
        }
    }
}

impl fmt::Display for SessionStoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStoreType::Sqlite => f.write_str("sqlite"),
            SessionStoreType::Memory => f.write_str("memory"),
        }
    }
}

/// Base config: Telegram-related, logging, session store only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Log file path
    pub log_file: String,
    /// Session database URL (SQLite file path, `sqlite:` or `file:` prefix allowed)
    pub database_url: String,
    pub session_store_type: SessionStoreType,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let session_store_type = match env::var("SESSION_STORE_TYPE") {
            Ok(s) => s.parse()?,
            Err(_) => SessionStoreType::Sqlite,
        };

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            database_url,
            session_store_type,
        })
    }

    /// Validate config: non-empty token, telegram_api_url must be a valid URL if set.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
