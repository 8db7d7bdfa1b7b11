//! LLM configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn timeout_secs(&self) -> u64;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub ai_model: String,
    pub ai_timeout_secs: u64,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.openai_api_key
    }
    fn base_url(&self) -> &str {
        &self.openai_base_url
    }
    fn model(&self) -> &str {
        &self.ai_model
    }
    fn timeout_secs(&self) -> u64 {
        self.ai_timeout_secs
    }
}

impl EnvLlmConfig {
    /// Load from OPENAI_API_KEY (required), OPENAI_BASE_URL, AI_MODEL, AI_TIMEOUT_SECS.
    pub fn from_env() -> Result<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let openai_base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let ai_model = env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let ai_timeout_secs = env::var("AI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Ok(Self {
            openai_api_key,
            openai_base_url,
            ai_model,
            ai_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["OPENAI_API_KEY", "OPENAI_BASE_URL", "AI_MODEL", "AI_TIMEOUT_SECS"] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "test_key");

        let config = EnvLlmConfig::from_env().unwrap();

        assert_eq!(config.api_key(), "test_key");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.timeout_secs(), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    #[serial]
    fn test_from_env_custom_values() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "custom_key");
        env::set_var("OPENAI_BASE_URL", "https://custom.api.com/v1");
        env::set_var("AI_MODEL", "gpt-4");
        env::set_var("AI_TIMEOUT_SECS", "15");

        let config = EnvLlmConfig::from_env().unwrap();

        assert_eq!(config.base_url(), "https://custom.api.com/v1");
        assert_eq!(config.model(), "gpt-4");
        assert_eq!(config.timeout_secs(), 15);
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout_falls_back() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "k");
        env::set_var("AI_TIMEOUT_SECS", "0");
        assert_eq!(EnvLlmConfig::from_env().unwrap().timeout_secs(), DEFAULT_TIMEOUT_SECS);

        env::set_var("AI_TIMEOUT_SECS", "soon");
        assert_eq!(EnvLlmConfig::from_env().unwrap().timeout_secs(), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    #[serial]
    fn test_from_env_requires_api_key() {
        clear_env();
        assert!(EnvLlmConfig::from_env().is_err());
    }
}
