//! GET /settings - Nessie customers proxy

use axum::{extract::State, routing::get, Json, Router};
use serde_json::Value;

use crate::http::ApiError;
use crate::state::AppState;

/// Returns the upstream body verbatim
async fn settings(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let customers = state.nessie().customers().await?;
    Ok(Json(customers))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/settings", get(settings))
}
