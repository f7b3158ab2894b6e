//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Application display name, used in the welcome message
    pub app_name: String,

    /// Application version string
    pub version: String,

    /// Static API key shared by all clients
    pub api_key: String,

    /// Server port
    pub port: u16,

    /// Path to the fitted preprocessor artifact
    pub preprocessor_path: String,

    /// Path to the forest classifier artifact
    pub forest_model_path: String,

    /// Path to the gradient-boosted classifier artifact
    pub xgb_model_path: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            app_name: env::var("APP_NAME")
                .unwrap_or_else(|_| "Churn Prediction".to_string()),

            version: env::var("APP_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),

            api_key: env::var("API_KEY")
                .unwrap_or_else(|_| "dev-api-key-change-in-production".to_string()),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            preprocessor_path: env::var("PREPROCESSOR_PATH")
                .unwrap_or_else(|_| "models/preprocessor.onnx".to_string()),

            forest_model_path: env::var("FOREST_MODEL_PATH")
                .unwrap_or_else(|_| "models/forest.onnx".to_string()),

            xgb_model_path: env::var("XGB_MODEL_PATH")
                .unwrap_or_else(|_| "models/xgb.onnx".to_string()),
        }
    }
}
