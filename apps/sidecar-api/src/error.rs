//! Error types for the pandoc sidecar API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pandoc_engine::EngineError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Inline conversion rejected by pandoc. The text usually reflects bad
    /// source markup, so this is the caller's problem.
    #[error("Pandoc conversion failed: {0}")]
    ConversionRejected(String),

    /// File or PDF pipeline failure. More often an environment issue than a
    /// caller mistake.
    #[error("Conversion failed: {0}")]
    ConversionFailed(String),

    /// Pandoc itself is missing or misconfigured.
    #[error("Pandoc unavailable: {0}")]
    Environment(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidInput(msg) => ApiError::InvalidRequest(msg),
            EngineError::Environment(msg) => ApiError::Environment(msg),
            // Spawn/filesystem failures mean the environment is broken; keep
            // the diagnostic so the caller can see what is missing.
            EngineError::Io(err) => ApiError::Environment(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::ConversionRejected(stderr) => (
                StatusCode::BAD_REQUEST,
                format!("Pandoc conversion failed: {}", stderr),
            ),
            ApiError::ConversionFailed(stderr) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Conversion failed: {}", stderr),
            ),
            ApiError::Environment(msg) => {
                tracing::error!("Pandoc unavailable: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Pandoc unavailable: {}", msg),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
