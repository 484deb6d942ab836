//! Serialized scaler/model artifacts
//!
//! Both artifacts are fitted out-of-band by the training process and
//! exported as JSON documents. They are loaded once at startup and
//! treated as immutable for the process lifetime.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PredictResult, PredictionError};

/// Failure to read or decode an artifact file
#[derive(Debug, thiserror::Error)]
#[error("failed to load artifact {path}: {reason}")]
pub struct ArtifactLoadError {
    pub path: String,
    pub reason: String,
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactLoadError> {
    let raw = fs::read_to_string(path).map_err(|e| ArtifactLoadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&raw).map_err(|e| ArtifactLoadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Pre-fitted standardization transform: per-feature mean and scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerArtifact {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl ScalerArtifact {
    pub fn load(path: &Path) -> Result<Self, ArtifactLoadError> {
        let scaler: Self = load_json(path)?;

        if scaler.mean.len() != scaler.scale.len() {
            return Err(ArtifactLoadError {
                path: path.display().to_string(),
                reason: format!(
                    "mean has {} entries but scale has {}",
                    scaler.mean.len(),
                    scaler.scale.len()
                ),
            });
        }

        Ok(scaler)
    }

    /// Center and scale a feature vector: `(x - mean) / scale` per slot.
    pub fn transform(&self, features: &[f64]) -> PredictResult<Vec<f64>> {
        if features.len() != self.mean.len() {
            return Err(PredictionError::TransformError(format!(
                "expected {} features, got {}",
                self.mean.len(),
                features.len()
            )));
        }

        let scaled = features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(&x, (&mean, &scale))| {
                // A zero scale marks a degenerate (constant) feature;
                // sklearn substitutes 1.0 there and so do we.
                let divisor = if scale == 0.0 { 1.0 } else { scale };
                (x - mean) / divisor
            })
            .collect();

        Ok(scaled)
    }
}

/// Pre-fitted linear (ridge) regression model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl ModelArtifact {
    pub fn load(path: &Path) -> Result<Self, ArtifactLoadError> {
        load_json(path)
    }

    /// Score a scaled feature vector: `dot(coefficients, x) + intercept`.
    pub fn predict(&self, scaled: &[f64]) -> PredictResult<f64> {
        if scaled.len() != self.coefficients.len() {
            return Err(PredictionError::PredictError(format!(
                "expected {} features, got {}",
                self.coefficients.len(),
                scaled.len()
            )));
        }

        let dot: f64 = self
            .coefficients
            .iter()
            .zip(scaled.iter())
            .map(|(&w, &x)| w * x)
            .sum();

        Ok(dot + self.intercept)
    }
}

/// A single FWI prediction, formatted to 2 decimals for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FwiPrediction(pub f64);

impl FwiPrediction {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for FwiPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
