//! Health check endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::ApiError;
use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Database connectivity response
#[derive(Serialize)]
pub struct DatabaseHealthResponse {
    pub status: &'static str,
    pub database: String,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// GET /health/db - acquires the shared handle and pings it
async fn database_health(
    State(state): State<AppState>,
) -> Result<Json<DatabaseHealthResponse>, ApiError> {
    let database = state.database().ping().await?;
    Ok(Json(DatabaseHealthResponse {
        status: "connected",
        database,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/db", get(database_health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_returns_healthy() {
        let Json(body) = health().await;
        assert_eq!(body.status, "healthy");
    }
}
