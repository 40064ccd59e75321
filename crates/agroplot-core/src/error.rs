//! Error handling for AgroPlot core
//!
//! Provides the error types shared by every layer of the data core:
//! - Validation errors (structural or semantic rule violations)
//! - Spacing errors (malformed planting distance strings)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Validation error type
///
/// Produced when a [`ValidationResult`](crate::validation::ValidationResult)
/// that failed is converted into a `Result` for `?` propagation. The message
/// always names the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {message}")]
pub struct ValidationError {
    /// Human-readable reason, naming the offending field.
    pub message: String,
}

impl ValidationError {
    /// Create a validation error from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Spacing parse error type
///
/// Represents errors from parsing a plant spacing string such as `"30cm"` or
/// `"0.5x0.8m"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpacingError {
    /// The string is empty
    #[error("Spacing is empty")]
    Empty,

    /// The string does not match `<num>[x<num>](cm|m)`
    #[error("Invalid spacing format: '{value}' (expected e.g. '30cm', '1m', '0.5x0.8m')")]
    InvalidFormat {
        /// The rejected input.
        value: String,
    },

    /// A numeric component could not be represented
    #[error("Invalid spacing number '{number}' in '{value}'")]
    InvalidNumber {
        /// The rejected input.
        value: String,
        /// The numeric component that failed to parse.
        number: String,
    },
}

/// Main error type for AgroPlot core
///
/// A unified error type for the core crate's public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Spacing error
    #[error(transparent)]
    Spacing(#[from] SpacingError),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
