//! Inference engine
//!
//! The preprocessor and classifiers are opaque fitted artifacts behind
//! trait seams, so the HTTP layer never sees the ONNX runtime directly.

pub mod adapter;
pub mod artifacts;
pub mod engine;
pub mod onnx;

pub use adapter::infer;
pub use artifacts::ModelRegistry;
pub use engine::{Classifier, InferenceError, Preprocessor};
