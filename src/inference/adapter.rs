//! Inference adapter
//!
//! The only path from a validated record to a prediction: build the raw
//! row, transform, predict, map the outputs into the response contract.

use crate::models::{CustomerRecord, PredictionResult};

use super::engine::{Classifier, InferenceError, Preprocessor};

/// Run one record through the preprocessor and a classifier.
///
/// Deterministic for a fixed (record, preprocessor, model) triple; engine
/// errors propagate untouched, there are no retries.
pub fn infer(
    record: &CustomerRecord,
    preprocessor: &dyn Preprocessor,
    model: &dyn Classifier,
) -> Result<PredictionResult, InferenceError> {
    let row = record.to_row();

    let features = preprocessor.transform(&row)?;

    let labels = model.predict(&features)?;
    let probabilities = model.predict_probability(&features)?;

    let label = labels
        .first()
        .copied()
        .ok_or_else(|| InferenceError::BadOutput("empty label vector".to_string()))?;

    // Index 1 is the probability mass on the churn class
    let churn_probability = probabilities
        .get((0, 1))
        .copied()
        .ok_or_else(|| InferenceError::BadOutput("missing churn class probability".to_string()))?;

    Ok(PredictionResult {
        churn_prediction: label != 0,
        churn_probability: churn_probability as f64,
    })
}
