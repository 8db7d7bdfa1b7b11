//! Config tests.

use crate::config::{BotConfig, SessionStoreType};
use serial_test::serial;
use std::env;

const KEYS: &[&str] = &[
    "BOT_TOKEN",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "LOG_FILE",
    "DATABASE_URL",
    "SESSION_STORE_TYPE",
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "AI_MODEL",
    "AI_TIMEOUT_SECS",
];

fn reset_env() {
    for key in KEYS {
        env::remove_var(key);
    }
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("OPENAI_API_KEY", "test_key");
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    reset_env();

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert!(config.telegram_api_url().is_none());
    assert_eq!(config.database_url(), "./chatai_bot.db");
    assert_eq!(config.log_file(), "logs/chatai-bot.log");
    assert_eq!(config.session_store_type(), SessionStoreType::Sqlite);
    assert_eq!(config.llm().ai_model, "gpt-3.5-turbo");
    assert_eq!(config.llm().ai_timeout_secs, 60);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    reset_env();
    env::set_var("DATABASE_URL", "sqlite:/tmp/custom.db");
    env::set_var("LOG_FILE", "/tmp/bot.log");
    env::set_var("SESSION_STORE_TYPE", "Memory");
    env::set_var("TELOXIDE_API_URL", "http://localhost:8081");
    env::set_var("AI_MODEL", "gpt-4o-mini");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.database_url(), "sqlite:/tmp/custom.db");
    assert_eq!(config.log_file(), "/tmp/bot.log");
    assert_eq!(config.session_store_type(), SessionStoreType::Memory);
    assert_eq!(config.telegram_api_url(), Some("http://localhost:8081"));
    assert_eq!(config.llm().ai_model, "gpt-4o-mini");

    reset_env();
}

#[test]
#[serial]
fn test_load_config_with_override_token() {
    reset_env();
    env::set_var("BOT_TOKEN", "env_token");

    let config = BotConfig::load(Some("override_token".to_string())).unwrap();

    assert_eq!(config.bot_token(), "override_token");
}

#[test]
#[serial]
fn test_missing_bot_token_is_error() {
    reset_env();
    env::remove_var("BOT_TOKEN");

    let err = BotConfig::load(None).err().unwrap();
    assert!(err.to_string().contains("BOT_TOKEN"));

    reset_env();
}

#[test]
#[serial]
fn test_unknown_store_type_is_error() {
    reset_env();
    env::set_var("SESSION_STORE_TYPE", "redis");

    assert!(BotConfig::load(None).is_err());

    reset_env();
}

#[test]
#[serial]
fn test_validate_telegram_api_url_invalid() {
    reset_env();
    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    reset_env();
}

#[test]
#[serial]
fn test_validate_empty_token() {
    reset_env();

    let config = BotConfig::load(Some("  ".to_string())).unwrap();
    assert!(config.validate().is_err());
}
