//! Error types for the health insights engine

use thiserror::Error;

/// Errors raised while building or parsing reference data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReferenceDataError {
    #[error("Unknown metric type: {0}")]
    UnknownMetric(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),
}

/// Input validation failure
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Validation error on '{field}': {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
