//! Canned [`llm_client::CompletionClient`] that records the requests it receives.

use std::sync::Mutex;

use async_trait::async_trait;
use llm_client::{Choice, CompletionClient, CompletionRequest, CompletionResponse, LlmError};

/// What the stub answers with.
#[derive(Clone)]
pub enum Canned {
    Replies(Vec<&'static str>),
    Fail(&'static str),
    Timeout,
}

pub struct StubCompletion {
    canned: Canned,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubCompletion {
    pub fn new(canned: Canned) -> Self {
        Self {
            canned,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &'static str) -> Self {
        Self::new(Canned::Replies(vec![text]))
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for StubCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.canned {
            Canned::Replies(texts) => Ok(CompletionResponse {
                choices: texts
                    .iter()
                    .enumerate()
                    .map(|(i, t)| Choice {
                        index: i as u32,
                        content: Some(t.to_string()),
                    })
                    .collect(),
            }),
            Canned::Fail(message) => Err(LlmError::Remote(message.to_string())),
            Canned::Timeout => Err(LlmError::Timeout),
        }
    }
}
