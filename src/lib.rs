//! Churn Prediction API
//!
//! A thin HTTP façade over three pre-fitted artifacts: a shared feature
//! preprocessor and two binary churn classifiers (forest and gradient
//! boosted). Requests are validated against the record schema, run
//! through the inference adapter, and answered with a stable two-field
//! JSON contract.
//!
//! ```text
//! JSON body ──► CustomerRecord (validated)
//!                    │
//!                    ▼
//!            inference::infer ──► preprocessor.transform ──► model.predict
//!                    │
//!                    ▼
//!            PredictionResult {churn_prediction, churn_probability}
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod inference;
pub mod middleware;
pub mod models;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use config::Config;
pub use error::{AppError, AppResult};
pub use inference::ModelRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub models: Arc<ModelRegistry>,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/", get(handlers::root::home))
        .route("/health", get(handlers::root::health));

    // Prediction routes, gated by the static API key
    let predict_routes = Router::new()
        .route("/predict/forest", post(handlers::predict::forest))
        .route("/predict/xgb", post(handlers::predict::xgb))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_api_key,
        ));

    Router::new()
        .merge(public_routes)
        .merge(predict_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
