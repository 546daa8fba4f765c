use crate::client::LlmClient;
use crate::error::LlmError;
use crate::protocol::{ChatCompletionRequest, ChatCompletionResponse, ChatPrompt, ErrorResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Sampling temperature for recipe generation.
pub const TEMPERATURE: f32 = 0.7;

/// Client for OpenAI-compatible chat-completion endpoints.
///
/// No timeout is set beyond reqwest's defaults.
#[derive(Debug)]
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl LlmClient for OpenAiClient {
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, LlmError> {
        let request = ChatCompletionRequest::new(self.model.clone(), prompt, TEMPERATURE);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!("Upstream returned {}: {}", status, body);
            return Err(ErrorResponse::into_llm_error(status.as_u16(), &body));
        }

        ChatCompletionResponse::content_from_body(&body)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
