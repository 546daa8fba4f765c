use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::service::GenerateError;

/// Errors returned by the HTTP API.
#[derive(Debug)]
pub enum ApiError {
    /// 400: the request did not carry a usable ingredient list.
    InvalidInput(String),
    /// 500: the upstream call or its parsing failed.
    GenerationFailed { details: String },
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl From<GenerateError> for ApiError {
    fn from(e: GenerateError) -> Self {
        match e {
            GenerateError::InvalidInput(v) => ApiError::InvalidInput(v.to_string()),
            other => ApiError::GenerationFailed {
                details: other.details(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidInput(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: message,
                    details: None,
                },
            ),
            ApiError::GenerationFailed { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "Recipe generation failed".to_string(),
                    details: Some(details),
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}
