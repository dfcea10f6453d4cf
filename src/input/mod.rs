use std::path::Path;

pub mod presets;

use serde::Deserialize;
use thiserror::Error;

use crate::model::N_PARAMETERS;
pub use presets::{SampleOil, sample_oils};

pub const PARAM_MIN: f64 = 0.0;
pub const PARAM_MAX: f64 = 10.0;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid input: {label} is not a finite number")]
    NonFinite { label: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClampPolicy {
    #[default]
    Clamp,
    Keep,
}

/// Ten validated parameters ready for scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct InputVector {
    pub values: Vec<f64>,
    /// Positions whose raw value fell outside `[PARAM_MIN, PARAM_MAX]`.
    pub clamped: Vec<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ValuesDoc {
    List(Vec<f64>),
    Object { values: Vec<f64> },
}

pub fn parameter_label(position: usize) -> String {
    format!("Chemical Parameter {}", position + 1)
}

pub fn parameter_labels() -> Vec<String> {
    (0..N_PARAMETERS).map(parameter_label).collect()
}

/// Accepts `[1, 2, ...]` or `{"values": [1, 2, ...]}`.
pub fn parse_values_json(text: &str) -> Result<Vec<f64>, InputError> {
    let doc: ValuesDoc = serde_json::from_str(text)?;
    Ok(match doc {
        ValuesDoc::List(values) => values,
        ValuesDoc::Object { values } => values,
    })
}

pub fn load_values_json(path: &Path) -> Result<Vec<f64>, InputError> {
    let text = std::fs::read_to_string(path)?;
    parse_values_json(&text)
}

pub fn validate(values: Vec<f64>, policy: ClampPolicy) -> Result<InputVector, InputError> {
    if values.len() != N_PARAMETERS {
        return Err(InputError::InvalidInput(format!(
            "expected {} parameters, got {}",
            N_PARAMETERS,
            values.len()
        )));
    }

    let mut out = Vec::with_capacity(N_PARAMETERS);
    let mut clamped = Vec::new();
    for (i, v) in values.into_iter().enumerate() {
        if !v.is_finite() {
            return Err(InputError::NonFinite {
                label: parameter_label(i),
            });
        }
        let in_range = (PARAM_MIN..=PARAM_MAX).contains(&v);
        if !in_range {
            clamped.push(i);
        }
        match policy {
            ClampPolicy::Clamp => out.push(v.clamp(PARAM_MIN, PARAM_MAX)),
            ClampPolicy::Keep => out.push(v),
        }
    }

    if !clamped.is_empty() {
        let labels = clamped
            .iter()
            .map(|&i| parameter_label(i))
            .collect::<Vec<_>>()
            .join(", ");
        match policy {
            ClampPolicy::Clamp => {
                tracing::warn!("clamped to [{PARAM_MIN}, {PARAM_MAX}]: {labels}")
            }
            ClampPolicy::Keep => {
                tracing::warn!("outside [{PARAM_MIN}, {PARAM_MAX}], kept as given: {labels}")
            }
        }
    }

    Ok(InputVector {
        values: out,
        clamped,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
