//! Error types for ntm-addressing
//!
//! The numeric routines never fail: degenerate input yields inf/NaN per
//! IEEE-754. These errors cover the variable store, feeds and optimizer steps.

use thiserror::Error;

/// Result type for ntm-addressing operations
pub type Result<T> = std::result::Result<T, NtmError>;

/// ntm-addressing error types
#[derive(Error, Debug)]
pub enum NtmError {
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    #[error("Variable already exists: {0}")]
    DuplicateVariable(String),

    #[error("Missing feed value: {0}")]
    MissingFeed(String),

    #[error("Shape mismatch for {name}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        name: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Distribution error: {0}")]
    Distribution(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for NtmError {
    fn from(err: serde_json::Error) -> Self {
        NtmError::SerializationError(err.to_string())
    }
}

impl From<rand_distr::NormalError> for NtmError {
    fn from(err: rand_distr::NormalError) -> Self {
        NtmError::Distribution(err.to_string())
    }
}
