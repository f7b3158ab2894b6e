//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use validator::ValidationErrors;

use crate::inference::InferenceError;
use crate::models::customer::json_field_name;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// Missing or incorrect API key
    Unauthorized,

    /// Request body could not be read as a record at all
    MalformedBody(String),

    /// Request body violates the record schema
    Validation(ValidationErrors),

    /// Failure inside the transform/predict path
    Inference(InferenceError),
}

/// One schema violation, keyed by the JSON field name
#[derive(Debug, Serialize)]
struct FieldDiagnostic {
    field: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => {
                let body = Json(json!({
                    "error": "you are not authorized to use this API",
                    "status": StatusCode::UNAUTHORIZED.as_u16()
                }));
                (StatusCode::UNAUTHORIZED, body).into_response()
            }
            AppError::MalformedBody(detail) => {
                let body = Json(json!({
                    "error": detail,
                    "status": StatusCode::UNPROCESSABLE_ENTITY.as_u16()
                }));
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
            AppError::Validation(errors) => {
                let details = field_diagnostics(&errors);
                let body = Json(json!({
                    "error": "request body failed validation",
                    "status": StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
                    "details": details
                }));
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
            AppError::Inference(err) => {
                tracing::error!("Inference error: {:?}", err);
                let body = Json(json!({
                    "error": err.to_string(),
                    "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16()
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

fn field_diagnostics(errors: &ValidationErrors) -> Vec<FieldDiagnostic> {
    let mut details: Vec<FieldDiagnostic> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(|e| FieldDiagnostic {
                field: json_field_name(field),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.to_string()),
            })
        })
        .collect();
    // Stable order for clients and tests
    details.sort_by_key(|d| d.field);
    details
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<InferenceError> for AppError {
    fn from(err: InferenceError) -> Self {
        AppError::Inference(err)
    }
}
