//! # LLM client abstraction
//!
//! Defines the [`CompletionClient`] trait consumed by the router, its request/response types,
//! and an OpenAI-compatible implementation built on async-openai.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

mod config;
mod error;
mod openai;

pub use config::{EnvLlmConfig, LlmConfig};
pub use error::LlmError;
pub use openai::{mask_token, OpenAICompletionClient};

/// One completion call: model identifier and prompt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
        }
    }
}

/// One candidate reply. `content` is None when the endpoint returned a choice without text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub index: u32,
    pub content: Option<String>,
}

/// Ordered candidate replies. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

impl CompletionResponse {
    /// Text of the first choice, if there is a first choice and it carries text.
    pub fn first_reply(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.content.as_deref())
    }
}

/// Completion endpoint: one request, one attempt.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_reply_on_empty_response_is_none() {
        assert_eq!(CompletionResponse::default().first_reply(), None);
    }

    #[test]
    fn test_first_reply_takes_first_in_sequence() {
        let response = CompletionResponse {
            choices: vec![
                Choice {
                    index: 1,
                    content: Some("second".to_string()),
                },
                Choice {
                    index: 0,
                    content: Some("first".to_string()),
                },
            ],
        };
        assert_eq!(response.first_reply(), Some("second"));
    }

    #[test]
    fn test_first_reply_without_content_is_none() {
        let response = CompletionResponse {
            choices: vec![Choice {
                index: 0,
                content: None,
            }],
        };
        assert_eq!(response.first_reply(), None);
    }
}
