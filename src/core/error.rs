//! Configuration error types
//!
//! Validation failures are never errors here: they travel as data in
//! [`ProcessResult::error`](crate::core::ProcessResult). These variants are
//! raised while *configuring* params and pipelines.

use thiserror::Error;

/// Error types for param and pipeline configuration
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("Invalid parameter name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown step: {0}")]
    UnknownStep(String),

    #[error("Context must be an object, got {0}")]
    InvalidContext(String),
}

impl ParamError {
    pub(crate) fn invalid_name(name: &str, reason: impl Into<String>) -> Self {
        ParamError::InvalidName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
