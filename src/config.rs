//! Configuration module

use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Directory holding the serialized scaler/model artifacts
    pub model_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),

            model_dir: env::var("FWI_MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("model")),
        }
    }

    /// Path to the serialized scaler artifact
    pub fn scaler_path(&self) -> PathBuf {
        self.model_dir.join("scaler.json")
    }

    /// Path to the serialized regression model artifact
    pub fn model_path(&self) -> PathBuf {
        self.model_dir.join("model.json")
    }
}
