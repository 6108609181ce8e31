// src/error.rs
use thiserror::Error;

/// Error types for the bsm-hvar library
#[derive(Debug, Error)]
pub enum RiskError {
    /// Invalid parameter values (pricing inputs, prices, weights)
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Not enough observations to form the requested statistic
    #[error("Insufficient data: {required} observations required, {available} available")]
    InsufficientData { required: usize, available: usize },

    /// Two inputs that must line up do not
    #[error("Dimension mismatch for {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        found: usize,
    },

    /// Invalid configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// A cell of a price file could not be interpreted
    #[error("Parse error at row {row}, column '{column}': {reason}")]
    Parse {
        row: usize,
        column: String,
        reason: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for bsm-hvar operations
pub type RiskResult<T> = Result<T, RiskError>;

/// Validation utilities
pub mod validation {
    use super::{RiskError, RiskResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> RiskResult<()> {
        // NaN fails the comparison and is rejected too
        if !(value > 0.0) {
            Err(RiskError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> RiskResult<()> {
        if !value.is_finite() {
            Err(RiskError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that at least `required` observations are available
    pub fn validate_min_len(required: usize, available: usize) -> RiskResult<()> {
        if available < required {
            Err(RiskError::InsufficientData {
                required,
                available,
            })
        } else {
            Ok(())
        }
    }

    /// Validate that two lengths agree
    pub fn validate_same_len(what: &str, expected: usize, found: usize) -> RiskResult<()> {
        if expected != found {
            Err(RiskError::DimensionMismatch {
                what: what.to_string(),
                expected,
                found,
            })
        } else {
            Ok(())
        }
    }
}
