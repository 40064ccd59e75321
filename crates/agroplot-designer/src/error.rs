//! Error types for the designer crate.
//!
//! Import is a trust boundary: every way a portable document can be refused
//! has its own variant so callers can tell a corrupt file from a well-formed
//! but invalid one.

use std::io;
use thiserror::Error;

/// Errors that can occur while importing a portable document.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file could not be read.
    #[error("Failed to read import file: {0}")]
    Io(#[from] io::Error),

    /// The text is not JSON, or does not have the shape of an export document.
    #[error("Invalid export document at line {line}, column {column}: {message}")]
    Decode {
        line: usize,
        column: usize,
        message: String,
    },

    /// The document decoded but breaks a validation rule.
    #[error("Export document rejected: {0}")]
    Invalid(String),
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::Decode {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// Errors that can occur while exporting a project.
#[derive(Error, Debug)]
pub enum ExportError {
    /// JSON serialization failed.
    #[error("Failed to serialize export document: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The export file could not be written.
    #[error("Failed to write export file: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for import operations.
pub type ImportResult<T> = Result<T, ImportError>;

/// Result type alias for export operations.
pub type DesignResult<T> = Result<T, ExportError>;
