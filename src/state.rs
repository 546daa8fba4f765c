use std::sync::Arc;

use dapur_llm::LlmClient;

use crate::service::RecipeService;

/// Application state shared across handlers.
pub struct AppState<L> {
    pub service: Arc<RecipeService<L>>,
}

impl<L: LlmClient> AppState<L> {
    pub fn new(llm: Arc<L>) -> Self {
        Self {
            service: Arc::new(RecipeService::new(llm)),
        }
    }
}

// Manual impl: deriving would require `L: Clone`.
impl<L> Clone for AppState<L> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}
