//! Dapur LLM - Chat-completion client for the recipe generator.
//!
//! The proxy only needs "send a prompt, get text back", so the upstream is
//! hidden behind [`LlmClient`]. [`OpenAiClient`] talks to any
//! OpenAI-compatible `/chat/completions` endpoint.

pub mod client;
pub mod error;
pub mod openai;
pub mod protocol;

#[cfg(any(test, feature = "test-utils"))]
pub mod fake;

pub use client::LlmClient;
pub use error::LlmError;
pub use openai::OpenAiClient;
pub use protocol::ChatPrompt;

#[cfg(any(test, feature = "test-utils"))]
pub use fake::FakeLlmClient;
