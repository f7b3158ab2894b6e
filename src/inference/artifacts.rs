//! Artifact registry
//!
//! All three fitted artifacts are loaded once at process startup and
//! shared read-only for the lifetime of the process.

use std::sync::Arc;

use crate::config::Config;

use super::engine::{Classifier, InferenceError, Preprocessor};
use super::onnx::{OnnxClassifier, OnnxPreprocessor};

/// The loaded preprocessor and both classifiers
#[derive(Clone)]
pub struct ModelRegistry {
    pub preprocessor: Arc<dyn Preprocessor>,
    pub forest: Arc<dyn Classifier>,
    pub xgb: Arc<dyn Classifier>,
}

impl ModelRegistry {
    /// Load every artifact from the configured paths
    pub fn load(config: &Config) -> Result<Self, InferenceError> {
        tracing::info!("Loading model artifacts...");

        let preprocessor = OnnxPreprocessor::load(&config.preprocessor_path)?;
        let forest = OnnxClassifier::load(&config.forest_model_path)?;
        let xgb = OnnxClassifier::load(&config.xgb_model_path)?;

        Ok(Self {
            preprocessor: Arc::new(preprocessor),
            forest: Arc::new(forest),
            xgb: Arc::new(xgb),
        })
    }
}
