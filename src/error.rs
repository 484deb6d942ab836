//! Error handling

pub type PredictResult<T> = Result<T, PredictionError>;

/// Everything that can go wrong while answering a predict request.
///
/// All variants are caught at the handler boundary and rendered as a
/// human-readable message on the form page; none of them terminates the
/// process or the request.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    /// A required form field is missing or not parseable as a number.
    #[error("invalid value for field '{field}'")]
    InvalidInput { field: &'static str },

    /// The scaler/model artifacts failed to load at startup; the service
    /// is degraded and refuses predictions until redeployed.
    #[error("models could not be loaded")]
    ModelUnavailable,

    /// The scaler rejected the feature vector (e.g. dimension mismatch).
    #[error("scaler transform failed: {0}")]
    TransformError(String),

    /// The regression model rejected the scaled vector.
    #[error("model prediction failed: {0}")]
    PredictError(String),
}

impl PredictionError {
    /// The text shown on the result page for this error kind.
    pub fn user_message(&self) -> String {
        match self {
            PredictionError::ModelUnavailable => "Models could not be loaded".to_string(),
            PredictionError::InvalidInput { .. }
            | PredictionError::TransformError(_)
            | PredictionError::PredictError(_) => {
                format!("Error during prediction: {}", self)
            }
        }
    }
}
