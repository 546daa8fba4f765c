use crate::error::LlmError;
use crate::protocol::ChatPrompt;

/// Trait for sending a prompt to a language model.
///
/// One call is one upstream request; implementations must not retry.
pub trait LlmClient: Send + Sync {
    /// Send the prompt and return the model's raw text answer.
    fn complete(
        &self,
        prompt: &ChatPrompt,
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}
