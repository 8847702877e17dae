//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Error response body: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// API-level errors with HTTP status mapping.
///
/// `Generation` is the single deliberate flattening of the pipeline's
/// typed failure kinds into one user-facing error — callers see only the
/// cause text, the typed kind lives in the logs.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Generation(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = match self {
            ApiError::Generation(detail) => detail,
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "API internal error");
                detail
            }
        };

        let body = ErrorBody { detail };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
