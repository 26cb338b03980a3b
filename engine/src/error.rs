//! Engine error handling
//!
//! Analyzers never fail; these errors come from loading configuration,
//! building reference data, validating input on request, and the
//! serialization boundary.

use health_insights_shared::{ReferenceDataError, ValidationError};
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

/// Engine error type
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Reference(#[from] ReferenceDataError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to initialise tracing: {0}")]
    Telemetry(#[from] TryInitError),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_transparent() {
        let error: EngineError = ValidationError::new("heartRate", "must be a valid number").into();
        assert_eq!(
            error.to_string(),
            "Validation error on 'heartRate': must be a valid number"
        );
    }

    #[test]
    fn test_reference_error_conversion() {
        let error: EngineError = ReferenceDataError::InvalidThreshold("bad band".to_string()).into();
        assert!(matches!(error, EngineError::Reference(_)));
        assert_eq!(error.to_string(), "Invalid threshold: bad band");
    }

    #[test]
    fn test_serialization_error_conversion() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: EngineError = parse_error.into();
        assert!(error.to_string().starts_with("Serialization error:"));
    }
}
