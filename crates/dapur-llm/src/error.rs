use thiserror::Error;

/// Error type for upstream LLM calls.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Response contained no message content")]
    EmptyResponse,
}

impl LlmError {
    /// The most specific human-readable detail available.
    ///
    /// For API errors this is the provider's own message rather than the
    /// wrapped status line.
    pub fn details(&self) -> String {
        match self {
            LlmError::Api { message, .. } => message.clone(),
            LlmError::RequestFailed(msg) | LlmError::Parse(msg) => msg.clone(),
            LlmError::EmptyResponse => self.to_string(),
        }
    }
}
