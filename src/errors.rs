//! Error types for schema loading.
//!
//! Classification itself never fails: an unclassifiable sentence is expressed
//! as an all-`None` [`NarrativeClassification`](crate::NarrativeClassification).
//! Every error here is fatal at load time and aborts the run before any
//! sentence is processed.

use thiserror::Error;

/// Errors raised while loading and validating a narrative schema document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The schema file could not be read.
    #[error("failed to read schema: {path}: {message}")]
    Read { path: String, message: String },

    /// The schema file is not valid JSON or does not match the document shape.
    #[error("malformed schema document: {path}: {message}")]
    Parse { path: String, message: String },

    /// The document parsed but violates a structural requirement.
    #[error("invalid schema: {message}")]
    Invalid { message: String },

    /// A configured pattern failed to compile.
    #[error("invalid pattern {pattern:?} in {context}: {message}")]
    Pattern {
        context: String,
        pattern: String,
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            message: message.into(),
        }
    }
}

/// Result type for schema-loading operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
