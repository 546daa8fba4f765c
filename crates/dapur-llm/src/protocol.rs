use serde::{Deserialize, Serialize};

use crate::error::LlmError;

/// A two-part prompt: the role description and the actual request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

impl ChatPrompt {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, prompt: &ChatPrompt, temperature: f32) -> Self {
        Self {
            model: model.into(),
            messages: vec![
                ChatMessage::new("system", &prompt.system),
                ChatMessage::new("user", &prompt.user),
            ],
            temperature,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    fn new(role: &'static str, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
        }
    }
}

/// Response body for a successful completion.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Parse a 2xx body and take the text of the first choice.
    pub fn content_from_body(body: &str) -> Result<String, LlmError> {
        let response: ChatCompletionResponse =
            serde_json::from_str(body).map_err(|e| LlmError::Parse(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::EmptyResponse)
    }
}

/// Error body returned by OpenAI-compatible APIs.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

impl ErrorResponse {
    /// Build the error for a non-2xx response, using the provider's message
    /// when the body has the usual shape and the raw body otherwise.
    pub fn into_llm_error(status: u16, body: &str) -> LlmError {
        let message = match serde_json::from_str::<ErrorResponse>(body) {
            Ok(parsed) => parsed.error.message,
            Err(_) if body.trim().is_empty() => format!("HTTP {}", status),
            Err(_) => body.to_string(),
        };
        LlmError::Api { status, message }
    }
}
