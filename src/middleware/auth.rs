//! API key middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{AppError, AppState};

/// Header carrying the client's API key
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Middleware: require the static API key on every gated route.
///
/// Missing or mismatched keys are rejected before the handler runs, so an
/// unauthorized request never reaches validation or inference.
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let key = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    if key != state.config.api_key {
        tracing::warn!("Rejected request with invalid API key");
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(req).await)
}
