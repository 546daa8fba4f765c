use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dapur::{create_router, AppState, Config};
use dapur_llm::OpenAiClient;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Required: OPENAI_API_KEY=<key>");
            eprintln!("Optional: PORT (default: 3001), DAPUR_BIND_HOST, OPENAI_MODEL, OPENAI_BASE_URL");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting Dapur recipe server");
    tracing::info!("Listen address: {}", config.listen_addr);
    tracing::info!("Model: {} at {}", config.openai_model, config.openai_base_url);

    let llm = Arc::new(OpenAiClient::new(
        config.openai_api_key.clone(),
        config.openai_model.clone(),
        config.openai_base_url.clone(),
    ));

    // Create app state
    let state = AppState::new(llm);

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running at http://{}", config.listen_addr);

    axum::serve(listener, app).await.expect("Server error");
}
