use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use dapur::{create_router, AppState};
use dapur_llm::FakeLlmClient;

const CHICKEN_RICE_BOWL: &str = r#"{"recipes": [{
    "title": "Chicken Rice Bowl",
    "ingredients": ["Chicken", "Rice"],
    "steps": ["Cook rice", "Cook chicken", "Combine"],
    "nutrition": "balanced",
    "difficulty": "Easy",
    "time": "20 mins",
    "cost": "RM 5"
}]}"#;

/// Create a test app backed by the given fake model.
fn create_test_app(llm: Arc<FakeLlmClient>) -> axum::Router {
    create_router(AppState::new(llm))
}

/// Helper to get response body as string.
async fn body_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn generate_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/generate-recipes")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ============================================================================
// Health endpoint tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(Arc::new(FakeLlmClient::with_response("{}")));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response.into_body()).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

// ============================================================================
// Generate endpoint tests
// ============================================================================

#[tokio::test]
async fn test_generate_recipes_success() {
    let llm = Arc::new(FakeLlmClient::with_response(CHICKEN_RICE_BOWL));
    let app = create_test_app(llm.clone());

    let response = app
        .oneshot(generate_request(r#"{"ingredients":["Chicken","Rice"]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response.into_body()).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    // The body is the bare recipe array, not the model's wrapper object.
    let recipes = json.as_array().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["title"], "Chicken Rice Bowl");
    assert_eq!(recipes[0]["difficulty"], "Easy");
    assert_eq!(recipes[0]["cost"], "RM 5");
    assert_eq!(recipes[0]["steps"].as_array().unwrap().len(), 3);

    assert_eq!(llm.call_count(), 1);
    assert!(llm.prompts()[0].user.contains("Chicken, Rice"));
}

#[tokio::test]
async fn test_generate_recipes_empty_list() {
    let llm = Arc::new(FakeLlmClient::with_response(CHICKEN_RICE_BOWL));
    let app = create_test_app(llm.clone());

    let response = app
        .oneshot(generate_request(r#"{"ingredients":[]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_string(response.into_body()).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "Ingredients array is required");
    assert!(json.get("details").is_none());

    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn test_generate_recipes_missing_field() {
    let llm = Arc::new(FakeLlmClient::with_response(CHICKEN_RICE_BOWL));
    let app = create_test_app(llm.clone());

    for body in [r#"{}"#, r#"{"ingredients":null}"#] {
        let response = app.clone().oneshot(generate_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_string(response.into_body()).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "Ingredients array is required");
    }

    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn test_generate_recipes_unparseable_body() {
    let llm = Arc::new(FakeLlmClient::with_response(CHICKEN_RICE_BOWL));
    let app = create_test_app(llm.clone());

    let response = app
        .clone()
        .oneshot(generate_request("ingredients=Chicken"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Wrong content type
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate-recipes")
                .body(Body::from(r#"{"ingredients":["Chicken"]}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn test_generate_recipes_malformed_model_output() {
    let llm = Arc::new(FakeLlmClient::with_response("Here are three tasty recipes!"));
    let app = create_test_app(llm.clone());

    let response = app
        .oneshot(generate_request(r#"{"ingredients":["Tofu"]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_string(response.into_body()).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "Recipe generation failed");
    assert!(!json["details"].as_str().unwrap().is_empty());

    assert_eq!(llm.call_count(), 1);
}

#[tokio::test]
async fn test_generate_recipes_upstream_error() {
    let llm = Arc::new(FakeLlmClient::with_api_error(
        429,
        "You exceeded your current quota",
    ));
    let app = create_test_app(llm.clone());

    let response = app
        .oneshot(generate_request(r#"{"ingredients":["Beef","Onion"]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_string(response.into_body()).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "Recipe generation failed");
    assert_eq!(json["details"], "You exceeded your current quota");

    assert_eq!(llm.call_count(), 1);
}

#[tokio::test]
async fn test_generate_recipes_network_error() {
    let llm = Arc::new(FakeLlmClient::with_request_failure("connection reset"));
    let app = create_test_app(llm);

    let response = app
        .oneshot(generate_request(r#"{"ingredients":["Fish"]}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_string(response.into_body()).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["details"], "connection reset");
}

#[tokio::test]
async fn test_generate_recipes_get_not_allowed() {
    let app = create_test_app(Arc::new(FakeLlmClient::with_response("{}")));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/generate-recipes")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = create_test_app(Arc::new(FakeLlmClient::with_response("{}")));

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/generate-recipes")
                .header("Origin", "http://localhost:3000")
                .header("Access-Control-Request-Method", "POST")
                .header("Access-Control-Request-Headers", "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}
