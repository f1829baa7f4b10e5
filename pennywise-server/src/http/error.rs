//! API error types with IntoResponse
//!
//! Bodies follow the `{"detail": ...}` shape the frontends expect.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pennywise_core::DbError;
use serde_json::json;

use crate::upstream::UpstreamError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Upstream proxy failure (500 for a missing key, 502/504 otherwise)
    Upstream(UpstreamError),

    /// Database unavailable (503)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(UpstreamError::MissingApiKey) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(UpstreamError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Upstream(UpstreamError::MissingApiKey) => {
                tracing::error!("NESSIE API key is not configured");
                json!({ "detail": UpstreamError::MissingApiKey.to_string() })
            }
            Self::Upstream(e) => {
                tracing::error!("Upstream error: {}", e);
                json!({ "detail": e.to_string() })
            }
            Self::Database(e) => {
                tracing::warn!("Database unavailable: {}", e);
                json!({
                    "status": "disconnected",
                    "detail": e.to_string()
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<UpstreamError> for ApiError {
    fn from(e: UpstreamError) -> Self {
        Self::Upstream(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
