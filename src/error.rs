use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("External API request failed: {0}")]
    UpstreamRequest(String),

    #[error("Missing key in {entity} data: '{key}'")]
    MissingKey { entity: &'static str, key: &'static str },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Empty response from external API")]
    EmptyUpstreamResponse,

    #[error("Invalid JSON response from external API")]
    InvalidUpstreamResponse,

    #[error("Failed to submit assignment")]
    SubmissionRejected,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::UpstreamRequest(cause) => {
                error!("upstream request failed: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("External API request failed: {}", cause),
                )
            }
            AppError::MissingKey { entity, key } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Missing key in {} data: '{}'", entity, key),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::EmptyUpstreamResponse => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Empty response from external API".to_string(),
            ),
            AppError::InvalidUpstreamResponse => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Invalid JSON response from external API".to_string(),
            ),
            AppError::SubmissionRejected => (
                StatusCode::BAD_REQUEST,
                "Failed to submit assignment".to_string(),
            ),
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
