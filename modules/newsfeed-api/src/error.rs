use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Errors that reach the caller of `GET /news`. Per-article enrichment
/// failures are absorbed upstream and never appear here.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("tags must be between {min} and {max} characters")]
    InvalidTags { min: usize, max: usize },

    #[error("{0}")]
    InvalidQuery(String),

    #[error("API keys are not configured.")]
    MissingApiKeys,

    #[error("Error from Tavily API: {0}")]
    UpstreamSearch(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidTags { .. } | ApiError::InvalidQuery(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::MissingApiKeys => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UpstreamSearch(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
