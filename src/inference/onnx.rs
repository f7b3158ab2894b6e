//! ONNX Runtime backed artifacts
//!
//! Each artifact is a fitted graph exported to ONNX and loaded once at
//! startup. The preprocessor graph declares one input per raw column
//! (string tensors for the categorical columns); the classifier graphs
//! take the numeric feature matrix and expose `label` and `probabilities`
//! outputs, the standard sklearn/xgboost export shape.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Tensor;
use parking_lot::Mutex;

use crate::models::{CellValue, RecordRow};

use super::engine::{Classifier, InferenceError, Preprocessor};

fn load_session(path: &str) -> Result<Session, InferenceError> {
    let load_err = |detail: String| InferenceError::ArtifactLoad {
        path: path.to_string(),
        detail,
    };

    if !std::path::Path::new(path).exists() {
        return Err(load_err("file not found".to_string()));
    }

    Session::builder()
        .map_err(|e| load_err(format!("failed to create session builder: {e}")))?
        .with_optimization_level(GraphOptimizationLevel::Level3)
        .map_err(|e| load_err(format!("failed to set optimization: {e}")))?
        .commit_from_file(path)
        .map_err(|e| load_err(format!("failed to load model: {e}")))
}

fn numeric_cell(row: &RecordRow, column: &'static str) -> Result<f32, InferenceError> {
    match row.get(column) {
        Some(CellValue::Int(v)) => Ok(*v as f32),
        Some(CellValue::Float(v)) => Ok(*v as f32),
        Some(CellValue::Text(_)) => Err(InferenceError::Transform(format!(
            "column {column} is not numeric"
        ))),
        None => Err(InferenceError::Transform(format!("missing column {column}"))),
    }
}

fn text_cell(row: &RecordRow, column: &'static str) -> Result<String, InferenceError> {
    match row.get(column) {
        Some(CellValue::Text(v)) => Ok(v.clone()),
        Some(_) => Err(InferenceError::Transform(format!(
            "column {column} is not categorical"
        ))),
        None => Err(InferenceError::Transform(format!("missing column {column}"))),
    }
}

/// Fitted preprocessing transformer loaded from an ONNX artifact
pub struct OnnxPreprocessor {
    // ort sessions need exclusive access to run
    session: Mutex<Session>,
    output_name: String,
}

impl OnnxPreprocessor {
    pub fn load(path: &str) -> Result<Self, InferenceError> {
        let session = load_session(path)?;

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError::ArtifactLoad {
                path: path.to_string(),
                detail: "no output defined".to_string(),
            })?;

        tracing::info!("Loaded preprocessor artifact from {}", path);

        Ok(Self {
            session: Mutex::new(session),
            output_name,
        })
    }
}

impl Preprocessor for OnnxPreprocessor {
    fn transform(&self, row: &RecordRow) -> Result<Array2<f32>, InferenceError> {
        let scalar = |column: &'static str| -> Result<Tensor<f32>, InferenceError> {
            let value = numeric_cell(row, column)?;
            Tensor::from_array(([1usize, 1], vec![value]))
                .map_err(|e| InferenceError::Transform(format!("tensor error: {e}")))
        };
        let text = |column: &'static str| -> Result<Tensor<String>, InferenceError> {
            let value = text_cell(row, column)?;
            Tensor::from_string_array(([1usize, 1], &[value][..]))
                .map_err(|e| InferenceError::Transform(format!("tensor error: {e}")))
        };

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![
                "CreditScore" => scalar("CreditScore")?,
                "Geography" => text("Geography")?,
                "Gender" => text("Gender")?,
                "Age" => scalar("Age")?,
                "Tenure" => scalar("Tenure")?,
                "Balance" => scalar("Balance")?,
                "NumOfProducts" => scalar("NumOfProducts")?,
                "HasCrCard" => scalar("HasCrCard")?,
                "IsActiveMember" => scalar("IsActiveMember")?,
                "EstimatedSalary" => scalar("EstimatedSalary")?,
            ])
            .map_err(|e| InferenceError::Transform(format!("transform failed: {e}")))?;

        let output = outputs
            .get(&self.output_name)
            .ok_or_else(|| InferenceError::Transform("no output".to_string()))?;

        let (shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::Transform(format!("extract error: {e}")))?;

        let width = if shape.len() == 2 {
            shape[1] as usize
        } else {
            data.len()
        };

        Array2::from_shape_vec((1, width), data.to_vec())
            .map_err(|e| InferenceError::Transform(format!("shape error: {e}")))
    }
}

/// Fitted binary classifier loaded from an ONNX artifact
pub struct OnnxClassifier {
    session: Mutex<Session>,
    label_output: String,
    probability_output: String,
}

impl OnnxClassifier {
    pub fn load(path: &str) -> Result<Self, InferenceError> {
        let session = load_session(path)?;

        // sklearn/xgboost exports declare the label first, probabilities second
        let mut output_names = session.outputs.iter().map(|o| o.name.clone());
        let (label_output, probability_output) = match (output_names.next(), output_names.next()) {
            (Some(label), Some(probability)) => (label, probability),
            _ => {
                return Err(InferenceError::ArtifactLoad {
                    path: path.to_string(),
                    detail: "expected label and probability outputs".to_string(),
                })
            }
        };

        tracing::info!("Loaded classifier artifact from {}", path);

        Ok(Self {
            session: Mutex::new(session),
            label_output,
            probability_output,
        })
    }

    fn input_tensor(features: &Array2<f32>) -> Result<Tensor<f32>, InferenceError> {
        let (rows, cols) = features.dim();
        let data: Vec<f32> = features.iter().copied().collect();
        Tensor::from_array(([rows, cols], data))
            .map_err(|e| InferenceError::Predict(format!("tensor error: {e}")))
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &Array2<f32>) -> Result<Vec<i64>, InferenceError> {
        let input = Self::input_tensor(features)?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input])
            .map_err(|e| InferenceError::Predict(format!("inference failed: {e}")))?;

        let output = outputs
            .get(&self.label_output)
            .ok_or_else(|| InferenceError::BadOutput("missing label output".to_string()))?;

        let (_, labels) = output
            .try_extract_tensor::<i64>()
            .map_err(|e| InferenceError::BadOutput(format!("extract error: {e}")))?;

        Ok(labels.to_vec())
    }

    fn predict_probability(&self, features: &Array2<f32>) -> Result<Array2<f32>, InferenceError> {
        let (rows, _) = features.dim();
        let input = Self::input_tensor(features)?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input])
            .map_err(|e| InferenceError::Predict(format!("inference failed: {e}")))?;

        let output = outputs
            .get(&self.probability_output)
            .ok_or_else(|| InferenceError::BadOutput("missing probability output".to_string()))?;

        let (_, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::BadOutput(format!("extract error: {e}")))?;

        if data.len() != rows * 2 {
            return Err(InferenceError::BadOutput(format!(
                "expected {} probabilities for 2 classes, got {}",
                rows * 2,
                data.len()
            )));
        }

        Array2::from_shape_vec((rows, 2), data.to_vec())
            .map_err(|e| InferenceError::BadOutput(format!("shape error: {e}")))
    }
}
