//! Feature layout and vector assembly
//!
//! The scaler and model artifacts were fitted against a fixed feature
//! layout; this module is the single source of truth for that layout.
//! Changing the order or count here breaks compatibility with every
//! previously exported artifact.

use serde::Deserialize;

use crate::error::{PredictResult, PredictionError};

/// Feature names in the exact order the scaler/model expect them
pub const FEATURE_LAYOUT: &[&str] = &[
    "Temperature", // 0: air temperature (C)
    "RH",          // 1: relative humidity (%)
    "Ws",          // 2: wind speed (km/h)
    "Rain",        // 3: rainfall (mm)
    "FFMC",        // 4: Fine Fuel Moisture Code
    "DMC",         // 5: Duff Moisture Code
    "ISI",         // 6: Initial Spread Index
    "Classes",     // 7: reserved, always 0.0 (see PredictForm)
    "Region",      // 8: reserved, always 0.0 (see PredictForm)
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 9;

/// Number of leading features parsed from the form; the remainder are
/// the reserved slots.
pub const REQUIRED_FIELD_COUNT: usize = 7;

/// Raw form body of `POST /predictdata`.
///
/// Every field arrives as text. The seven numeric fields are required;
/// `Classes` and `Region` are accepted but never mapped into the feature
/// vector — the fitted artifacts expect zeros in those two slots, so the
/// strings are carried only for logging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictForm {
    #[serde(rename = "Temperature")]
    pub temperature: Option<String>,
    #[serde(rename = "RH")]
    pub rh: Option<String>,
    #[serde(rename = "Ws")]
    pub ws: Option<String>,
    #[serde(rename = "Rain")]
    pub rain: Option<String>,
    #[serde(rename = "FFMC")]
    pub ffmc: Option<String>,
    #[serde(rename = "DMC")]
    pub dmc: Option<String>,
    #[serde(rename = "ISI")]
    pub isi: Option<String>,
    #[serde(rename = "Classes")]
    pub classes: Option<String>,
    #[serde(rename = "Region")]
    pub region: Option<String>,
}

/// Ordered 9-slot input vector, assembled per request and discarded
/// after the response.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Parse the seven required form fields and assemble the full vector,
    /// zero-filling the two reserved slots.
    pub fn from_form(form: &PredictForm) -> PredictResult<Self> {
        let mut values = [0.0f64; FEATURE_COUNT];

        let required: [(&'static str, &Option<String>); REQUIRED_FIELD_COUNT] = [
            ("Temperature", &form.temperature),
            ("RH", &form.rh),
            ("Ws", &form.ws),
            ("Rain", &form.rain),
            ("FFMC", &form.ffmc),
            ("DMC", &form.dmc),
            ("ISI", &form.isi),
        ];

        for (slot, (field, raw)) in required.into_iter().enumerate() {
            values[slot] = parse_field(field, raw.as_deref())?;
        }

        // Slots 7 and 8 (Classes, Region) stay 0.0.
        Ok(Self { values })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }
}

fn parse_field(field: &'static str, raw: Option<&str>) -> PredictResult<f64> {
    let text = raw
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(PredictionError::InvalidInput { field })?;

    let value: f64 = text
        .parse()
        .map_err(|_| PredictionError::InvalidInput { field })?;

    // "inf"/"NaN" parse as f64 but are meaningless measurements.
    if !value.is_finite() {
        return Err(PredictionError::InvalidInput { field });
    }

    Ok(value)
}
