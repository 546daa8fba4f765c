use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::Instrument;
use uuid::Uuid;

use dapur_core::{Recipe, RecipeRequest, ValidationError};
use dapur_llm::LlmClient;

use crate::error::ApiError;
use crate::service::GenerateError;
use crate::state::AppState;

pub fn routes<L: LlmClient + 'static>() -> Router<AppState<L>> {
    Router::new().route("/api/generate-recipes", post(generate_recipes::<L>))
}

/// POST /api/generate-recipes - Ask the model for recipes using the given ingredients.
async fn generate_recipes<L: LlmClient + 'static>(
    State(state): State<AppState<L>>,
    payload: Result<Json<RecipeRequest>, JsonRejection>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    // A body that is not a JSON object cannot carry an ingredient list either.
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!("Rejected recipe request body: {}", rejection);
            return Err(GenerateError::from(ValidationError::MissingIngredients).into());
        }
    };

    let count = request.ingredients.as_ref().map_or(0, Vec::len);
    let span = tracing::info_span!("generate_recipes", request_id = %Uuid::new_v4(), ingredients = count);

    async move {
        match state.service.generate(&request).await {
            Ok(recipes) => {
                tracing::info!(
                    "Generated {} recipes with {}",
                    recipes.len(),
                    state.service.model_name()
                );
                Ok(Json(recipes))
            }
            Err(GenerateError::InvalidInput(e)) => {
                tracing::warn!("Invalid recipe request: {}", e);
                Err(ApiError::InvalidInput(e.to_string()))
            }
            Err(e) => {
                tracing::error!("Recipe generation failed: {}", e);
                Err(e.into())
            }
        }
    }
    .instrument(span)
    .await
}
