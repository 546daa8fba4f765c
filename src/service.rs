use std::sync::Arc;

use thiserror::Error;

use dapur_core::{Recipe, RecipeBatch, RecipeRequest, ValidationError};
use dapur_llm::{LlmClient, LlmError};

use crate::prompt::recipe_prompt;

/// Why a generation request did not produce recipes.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),

    #[error("Upstream error: {0}")]
    Upstream(#[from] LlmError),

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),
}

impl GenerateError {
    /// Detail string reported to the caller alongside a failed generation.
    pub fn details(&self) -> String {
        match self {
            GenerateError::InvalidInput(e) => e.to_string(),
            GenerateError::Upstream(e) => e.details(),
            GenerateError::MalformedResponse(msg) => msg.clone(),
        }
    }
}

/// Validates a request, prompts the model once and parses its answer.
pub struct RecipeService<L> {
    llm: Arc<L>,
}

impl<L: LlmClient> RecipeService<L> {
    pub fn new(llm: Arc<L>) -> Self {
        Self { llm }
    }

    pub fn model_name(&self) -> &str {
        self.llm.model_name()
    }

    /// Generate recipes for the requested ingredients.
    ///
    /// Invalid input returns before any upstream call; otherwise exactly one
    /// call is made and its text must parse as `{ "recipes": [...] }`.
    pub async fn generate(&self, request: &RecipeRequest) -> Result<Vec<Recipe>, GenerateError> {
        let ingredients = request.validated()?;

        let prompt = recipe_prompt(ingredients);
        let text = self.llm.complete(&prompt).await?;

        RecipeBatch::parse(&text).map_err(|e| GenerateError::MalformedResponse(e.to_string()))
    }
}
