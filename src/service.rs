//! PredictionService - owns the loaded artifacts, answers predict requests

use crate::artifacts::{FwiPrediction, ModelArtifact, ScalerArtifact};
use crate::config::Config;
use crate::error::{PredictResult, PredictionError};
use crate::features::{FeatureVector, PredictForm};

/// The scaler/model pair, present only when both loaded successfully.
#[derive(Debug, Clone)]
struct Artifacts {
    scaler: ScalerArtifact,
    model: ModelArtifact,
}

/// Stateless prediction service.
///
/// Constructed once at startup and shared read-only across requests
/// (`Arc` in the axum state). If either artifact fails to load the
/// service comes up degraded: it stays constructible and queryable, but
/// every predict call fails fast with `ModelUnavailable` until the
/// artifacts are fixed and the process redeployed.
#[derive(Debug)]
pub struct PredictionService {
    artifacts: Option<Artifacts>,
}

impl PredictionService {
    /// Load both artifacts from the configured model directory.
    ///
    /// Load failure is logged and degrades the service instead of
    /// crashing the process, so operators see the condition via
    /// logs/health rather than a restart loop.
    pub fn load(config: &Config) -> Self {
        let scaler = match ScalerArtifact::load(&config.scaler_path()) {
            Ok(scaler) => scaler,
            Err(e) => {
                tracing::error!("scaler load failed, entering degraded mode: {}", e);
                return Self::degraded();
            }
        };

        let model = match ModelArtifact::load(&config.model_path()) {
            Ok(model) => model,
            Err(e) => {
                tracing::error!("model load failed, entering degraded mode: {}", e);
                return Self::degraded();
            }
        };

        tracing::info!(
            features = scaler.mean.len(),
            "scaler and model artifacts loaded from {}",
            config.model_dir.display()
        );

        Self {
            artifacts: Some(Artifacts { scaler, model }),
        }
    }

    /// Construct with pre-built artifacts (tests, embedded models).
    pub fn with_artifacts(scaler: ScalerArtifact, model: ModelArtifact) -> Self {
        Self {
            artifacts: Some(Artifacts { scaler, model }),
        }
    }

    /// Construct in degraded state: every predict returns `ModelUnavailable`.
    pub fn degraded() -> Self {
        Self { artifacts: None }
    }

    /// True when the artifacts failed to load.
    pub fn is_degraded(&self) -> bool {
        self.artifacts.is_none()
    }

    /// Parse the form, assemble the 9-slot feature vector, scale it and
    /// score it. Pure function of the form and the loaded artifacts.
    pub fn predict(&self, form: &PredictForm) -> PredictResult<FwiPrediction> {
        let vector = FeatureVector::from_form(form)?;

        // Degraded mode is checked explicitly, not inferred from a
        // downstream failure.
        let artifacts = self
            .artifacts
            .as_ref()
            .ok_or(PredictionError::ModelUnavailable)?;

        let scaled = artifacts.scaler.transform(vector.as_slice())?;
        let value = artifacts.model.predict(&scaled)?;

        tracing::debug!(
            input = ?vector.as_slice(),
            scaled = ?scaled,
            prediction = value,
            "prediction completed"
        );

        Ok(FwiPrediction(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_service() -> PredictionService {
        // Identity scaler and a model that sums all slots: the predicted
        // value equals the sum of the raw inputs, easy to assert against.
        PredictionService::with_artifacts(
            ScalerArtifact {
                mean: vec![0.0; 9],
                scale: vec![1.0; 9],
            },
            ModelArtifact {
                coefficients: vec![1.0; 9],
                intercept: 0.0,
            },
        )
    }

    fn sample_form() -> PredictForm {
        PredictForm {
            temperature: Some("29".into()),
            rh: Some("57".into()),
            ws: Some("18".into()),
            rain: Some("0".into()),
            ffmc: Some("65.7".into()),
            dmc: Some("3.4".into()),
            isi: Some("1.3".into()),
            classes: Some("not fire".into()),
            region: Some("1".into()),
        }
    }

    #[test]
    fn test_predict_end_to_end_vector() {
        let service = identity_service();
        let prediction = service.predict(&sample_form()).unwrap();

        // Sum of [29, 57, 18, 0, 65.7, 3.4, 1.3, 0, 0]; the Classes and
        // Region form values contribute nothing.
        let expected = 29.0 + 57.0 + 18.0 + 65.7 + 3.4 + 1.3;
        assert!((prediction.value() - expected).abs() < 1e-9);
        assert!(prediction.value().is_finite());
    }

    #[test]
    fn test_predict_is_deterministic() {
        let service = identity_service();
        let form = sample_form();

        let first = service.predict(&form).unwrap();
        let second = service.predict(&form).unwrap();
        assert_eq!(first.value().to_bits(), second.value().to_bits());
    }

    #[test]
    fn test_degraded_service_fails_fast() {
        let service = PredictionService::degraded();
        assert!(service.is_degraded());

        let result = service.predict(&sample_form());
        assert!(matches!(result, Err(PredictionError::ModelUnavailable)));
    }

    #[test]
    fn test_invalid_input_reported_before_model_check() {
        // A bad field is the client's fault even when the service is
        // degraded; parsing runs first.
        let service = PredictionService::degraded();
        let mut form = sample_form();
        form.isi = Some("one point three".into());

        let result = service.predict(&form);
        assert!(matches!(
            result,
            Err(PredictionError::InvalidInput { field: "ISI" })
        ));
    }

    #[test]
    fn test_dimension_mismatch_surfaces_as_transform_error() {
        let service = PredictionService::with_artifacts(
            ScalerArtifact {
                mean: vec![0.0; 4],
                scale: vec![1.0; 4],
            },
            ModelArtifact {
                coefficients: vec![1.0; 4],
                intercept: 0.0,
            },
        );

        let result = service.predict(&sample_form());
        assert!(matches!(result, Err(PredictionError::TransformError(_))));
    }

    #[test]
    fn test_load_from_missing_dir_degrades() {
        let config = Config {
            port: 5000,
            model_dir: std::path::PathBuf::from("/nonexistent"),
        };

        let service = PredictionService::load(&config);
        assert!(service.is_degraded());
    }

    #[test]
    fn test_load_from_valid_artifact_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("scaler.json"),
            r#"{"mean": [0,0,0,0,0,0,0,0,0], "scale": [1,1,1,1,1,1,1,1,1]}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("model.json"),
            r#"{"coefficients": [1,1,1,1,1,1,1,1,1], "intercept": 0.5}"#,
        )
        .unwrap();

        let config = Config {
            port: 5000,
            model_dir: dir.path().to_path_buf(),
        };

        let service = PredictionService::load(&config);
        assert!(!service.is_degraded());

        let prediction = service.predict(&sample_form()).unwrap();
        let expected = 29.0 + 57.0 + 18.0 + 65.7 + 3.4 + 1.3 + 0.5;
        assert!((prediction.value() - expected).abs() < 1e-9);
    }
}
