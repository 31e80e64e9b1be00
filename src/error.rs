use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

/// Body sent to clients for any failure above the single-source level.
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to fetch news data";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} API key is not configured")]
    ConfigMissing(String),

    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("Unsupported news source: {0}")]
    UnsupportedSource(String),

    #[error("Request handling failed: {0}")]
    Handler(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Error fetching news data: {}", self);

        let body = Json(ErrorResponse {
            error: GENERIC_ERROR_MESSAGE.to_string(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
