//! Error types for fixture loading.

use thiserror::Error;

/// Errors raised while loading and validating fixture files.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixture: {path}: {message}")]
    Read { path: String, message: String },

    /// The fixture file is not valid TOML or does not match the case shape.
    #[error("malformed fixture: {path}: {message}")]
    Parse { path: String, message: String },

    /// A case is structurally unusable.
    #[error("invalid fixture case in {path}: {message}")]
    Case { path: String, message: String },
}

/// Result type for fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;
