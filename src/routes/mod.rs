pub mod health;
pub mod recipes;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use dapur_llm::LlmClient;

use crate::state::AppState;

pub fn create_router<L: LlmClient + 'static>(state: AppState<L>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(recipes::routes())
        .merge(health::routes())
        .layer(cors)
        .with_state(state)
}
