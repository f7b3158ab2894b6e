//! Prediction response model

use serde::{Deserialize, Serialize};

/// Result of one churn prediction, serialized as the response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted class: true means the customer is expected to churn
    pub churn_prediction: bool,

    /// Probability mass on the churn class, in [0, 1]
    pub churn_probability: f64,
}
