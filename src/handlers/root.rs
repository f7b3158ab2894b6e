//! Welcome and health handlers

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::AppState;

/// Welcome message, no auth, always succeeds
pub async fn home(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": format!(
            "welcome to {} API v{}",
            state.config.app_name, state.config.version
        )
    }))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: String,
    timestamp: i64,
}

/// Liveness check
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: state.config.version.clone(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
