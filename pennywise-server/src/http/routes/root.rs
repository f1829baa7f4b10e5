//! GET / - app banner

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct RootResponse {
    pub message: String,
    pub status: &'static str,
}

async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: state.settings().app_name.clone(),
        status: "running",
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(root))
}
