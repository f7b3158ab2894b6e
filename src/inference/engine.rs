//! Engine traits and error kinds

use ndarray::Array2;
use thiserror::Error;

use crate::models::RecordRow;

/// Failure inside the transform/predict path.
///
/// Kinds stay distinguishable internally even though the API surface maps
/// them all to a single 500.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("failed to load artifact {path}: {detail}")]
    ArtifactLoad { path: String, detail: String },

    #[error("preprocessor transform failed: {0}")]
    Transform(String),

    #[error("model prediction failed: {0}")]
    Predict(String),

    #[error("unexpected model output: {0}")]
    BadOutput(String),
}

/// A fitted, deterministic transformer from one raw tabular row to a
/// fixed-width numeric feature matrix (1 x N).
pub trait Preprocessor: Send + Sync {
    fn transform(&self, row: &RecordRow) -> Result<Array2<f32>, InferenceError>;
}

/// A fitted binary classifier over preprocessed feature matrices.
pub trait Classifier: Send + Sync {
    /// Class label per row (0 = stay, 1 = churn)
    fn predict(&self, features: &Array2<f32>) -> Result<Vec<i64>, InferenceError>;

    /// Two-class probability distribution per row (n x 2)
    fn predict_probability(&self, features: &Array2<f32>) -> Result<Array2<f32>, InferenceError>;
}
