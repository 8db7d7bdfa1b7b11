//! OpenAI-compatible [`CompletionClient`]: async-openai request/usage/error types over a plain reqwest call.
//!
//! The prompt is sent as a single user message to `{base_url}/chat/completions`; choices are
//! mapped to [`Choice`] keeping their order, index and text. One attempt per call, no retries.
//! A 2xx reply whose `choices` is absent or null (or whose body is empty) is an empty response.

use std::time::Duration;

use async_openai::{
    error::ApiError,
    types::{
        ChatCompletionRequestUserMessageArgs, CompletionUsage, CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

use crate::config::LlmConfig;
use crate::error::LlmError;
use crate::{Choice, CompletionClient, CompletionRequest, CompletionResponse};

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_ascii() {
        return "***".to_string();
    }
    format!("{}***{}", &token[..7], &token[len - 4..])
}

/// Completion client for OpenAI-compatible chat endpoints.
#[derive(Clone)]
pub struct OpenAICompletionClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    /// Masked key, computed once for logs.
    masked_key: String,
}

impl OpenAICompletionClient {
    /// Builds a client for `base_url` whose HTTP requests give up after `timeout`.
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Request(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
            masked_key: mask_token(api_key),
        })
    }

    /// Builds a client from an [`LlmConfig`].
    pub fn from_config(config: &dyn LlmConfig) -> Result<Self, LlmError> {
        Self::new(
            config.api_key(),
            config.base_url(),
            Duration::from_secs(config.timeout_secs()),
        )
    }
}

/// Success body. Only `choices` and `usage` are read; both may be missing.
#[derive(Debug, Default, Deserialize)]
struct ChatCompletionBody {
    #[serde(default)]
    choices: Option<Vec<ChoiceBody>>,
    #[serde(default)]
    usage: Option<CompletionUsage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceBody {
    #[serde(default)]
    index: u32,
    #[serde(default)]
    message: Option<MessageBody>,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ApiError,
}

fn map_transport_error(e: reqwest::Error) -> LlmError {
    if e.is_timeout() {
        LlmError::Timeout
    } else {
        LlmError::Remote(e.to_string())
    }
}

/// Error text for a non-2xx reply: the API's own message when the body carries one.
fn remote_error_text(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(wrapped) => wrapped.error.message,
        Err(_) if body.trim().is_empty() => format!("API returned {}", status),
        Err(_) => format!("API returned {}: {}", status, body.trim()),
    }
}

/// Parses a 2xx body. Empty text and `null` both mean "no choices".
fn parse_success_body(body: &str) -> Result<ChatCompletionBody, LlmError> {
    if body.trim().is_empty() {
        return Ok(ChatCompletionBody::default());
    }
    let parsed: Option<ChatCompletionBody> = serde_json::from_str(body)
        .map_err(|e| LlmError::Remote(format!("failed to parse API response: {}", e)))?;
    Ok(parsed.unwrap_or_default())
}

#[async_trait]
impl CompletionClient for OpenAICompletionClient {
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        info!(
            prompt_len = request.prompt.len(),
            api_key = %self.masked_key,
            "Completion request"
        );

        let user_message = ChatCompletionRequestUserMessageArgs::default()
            .content(request.prompt.clone())
            .build()
            .map_err(|e| LlmError::Request(e.to_string()))?;
        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(request.model.clone())
            .messages(vec![user_message.into()])
            .build()
            .map_err(|e| LlmError::Request(e.to_string()))?;

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Completion request failed");
                map_transport_error(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            let message = remote_error_text(status, &body);
            error!(status = %status, error = %message, "Completion endpoint returned an error");
            return Err(LlmError::Remote(message));
        }

        let parsed = parse_success_body(&body)?;

        if let Some(ref u) = parsed.usage {
            info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "Completion usage"
            );
        }

        let choices = match parsed.choices {
            Some(choices) => choices
                .into_iter()
                .map(|c| Choice {
                    index: c.index,
                    content: c.message.and_then(|m| m.content),
                })
                .collect::<Vec<_>>(),
            None => {
                warn!("Completion response has no choices field");
                Vec::new()
            }
        };
        info!(choice_count = choices.len(), "Completion response");

        Ok(CompletionResponse { choices })
    }
}
