//! Fake LLM client for testing.
//!
//! Returns a canned reply and records every prompt it receives, so tests can
//! assert both on what the proxy sent and on how many upstream calls it made.

use std::sync::RwLock;

use crate::client::LlmClient;
use crate::error::LlmError;
use crate::protocol::ChatPrompt;

#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Api { status: u16, message: String },
    RequestFailed(String),
}

#[derive(Debug)]
pub struct FakeLlmClient {
    reply: Reply,
    prompts: RwLock<Vec<ChatPrompt>>,
}

impl FakeLlmClient {
    /// Answer every prompt with `text`.
    pub fn with_response(text: impl Into<String>) -> Self {
        Self::new(Reply::Text(text.into()))
    }

    /// Fail every call as if the provider returned a non-2xx status.
    pub fn with_api_error(status: u16, message: impl Into<String>) -> Self {
        Self::new(Reply::Api {
            status,
            message: message.into(),
        })
    }

    /// Fail every call as if the network request never completed.
    pub fn with_request_failure(message: impl Into<String>) -> Self {
        Self::new(Reply::RequestFailed(message.into()))
    }

    fn new(reply: Reply) -> Self {
        Self {
            reply,
            prompts: RwLock::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.read().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<ChatPrompt> {
        self.prompts.read().unwrap().clone()
    }
}

impl LlmClient for FakeLlmClient {
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, LlmError> {
        self.prompts.write().unwrap().push(prompt.clone());

        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Api { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
            Reply::RequestFailed(msg) => Err(LlmError::RequestFailed(msg.clone())),
        }
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
