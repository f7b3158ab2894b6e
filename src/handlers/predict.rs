//! Prediction handlers
//!
//! Both routes share one contract; the only difference is which
//! classifier artifact is bound.

use axum::{extract::State, Json};
use validator::Validate;

use crate::extract::JsonBody;
use crate::inference;
use crate::models::{CustomerRecord, PredictionResult};
use crate::{AppError, AppResult, AppState};

/// Predict churn with the forest model
pub async fn forest(
    State(state): State<AppState>,
    JsonBody(record): JsonBody<CustomerRecord>,
) -> AppResult<Json<PredictionResult>> {
    record.validate().map_err(AppError::Validation)?;

    let result = inference::infer(
        &record,
        state.models.preprocessor.as_ref(),
        state.models.forest.as_ref(),
    )?;

    tracing::debug!(
        "forest prediction: churn={} p={:.4}",
        result.churn_prediction,
        result.churn_probability
    );

    Ok(Json(result))
}

/// Predict churn with the gradient-boosted model
pub async fn xgb(
    State(state): State<AppState>,
    JsonBody(record): JsonBody<CustomerRecord>,
) -> AppResult<Json<PredictionResult>> {
    record.validate().map_err(AppError::Validation)?;

    let result = inference::infer(
        &record,
        state.models.preprocessor.as_ref(),
        state.models.xgb.as_ref(),
    )?;

    tracing::debug!(
        "xgb prediction: churn={} p={:.4}",
        result.churn_prediction,
        result.churn_probability
    );

    Ok(Json(result))
}
