use serde::Deserialize;

use dapur_core::{Recipe, RecipeRequest};

use crate::error::ClientError;

/// Trait for asking the proxy service for recipes.
pub trait RecipeApi: Send + Sync {
    fn generate_recipes(
        &self,
        ingredients: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<Recipe>, ClientError>> + Send;
}

/// HTTP client for `POST /api/generate-recipes`.
pub struct HttpRecipeApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecipeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/api/generate-recipes",
            self.base_url.trim_end_matches('/')
        )
    }
}

/// Error body returned by the proxy service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    details: Option<String>,
}

impl RecipeApi for HttpRecipeApi {
    async fn generate_recipes(&self, ingredients: &[String]) -> Result<Vec<Recipe>, ClientError> {
        let request = RecipeRequest::new(ingredients.to_vec());

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(ErrorBody {
                    error,
                    details: Some(details),
                }) => format!("{} ({})", error, details),
                Ok(ErrorBody { error, .. }) => error,
                Err(_) => status.to_string(),
            };
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Vec<Recipe>>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
