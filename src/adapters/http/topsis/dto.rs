//! Request/response DTOs and form-field validation for the ranking endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::analysis::Impact;

/// Error body returned for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Success body for a completed ranking run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub message: String,
}

/// Validation failures for the multipart form fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Missing form field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid weights or impacts format")]
    InvalidWeights,

    #[error("Weights must be non-negative")]
    NegativeWeight,

    #[error("Impacts must be + or -")]
    InvalidImpact,

    #[error("Weights and impacts count mismatch")]
    CountMismatch,

    #[error("Invalid CSV file")]
    InvalidFile,
}

/// Checks that the address is `local@domain.tld`-shaped: a non-empty local
/// part, a single `@`, and a dot inside the domain.
pub fn validate_email(address: &str) -> Result<(), FormError> {
    let (local, domain) = address.split_once('@').ok_or(FormError::InvalidEmail)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(FormError::InvalidEmail);
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(FormError::InvalidEmail),
    }
}

/// Parses comma-separated weights; every entry must be a non-negative float.
pub fn parse_weights(text: &str) -> Result<Vec<f64>, FormError> {
    let mut weights = Vec::new();
    for part in text.split(',') {
        let weight: f64 = part.trim().parse().map_err(|_| FormError::InvalidWeights)?;
        if !weight.is_finite() {
            return Err(FormError::InvalidWeights);
        }
        if weight < 0.0 {
            return Err(FormError::NegativeWeight);
        }
        weights.push(weight);
    }
    Ok(weights)
}

/// Parses comma-separated impact symbols (`+` / `-`).
pub fn parse_impacts(text: &str) -> Result<Vec<Impact>, FormError> {
    text.split(',')
        .map(|part| Impact::from_symbol(part.trim()).ok_or(FormError::InvalidImpact))
        .collect()
}
