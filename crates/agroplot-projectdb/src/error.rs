//! Error types for the project database crate.
//!
//! This module provides structured error types for the key/value substrate
//! and the project store built on top of it.

use std::io;
use thiserror::Error;

use agroplot_core::ValidationError;
use agroplot_settings::SettingsError;

/// Errors raised by a key/value substrate.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store cannot be used (missing directory, bad key...).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Writing the value would exceed the storage quota.
    #[error("Storage quota exceeded writing '{key}': needs {needed} bytes, {available} available")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Errors that can occur during project store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The project failed validation; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No history entry carries the requested id.
    #[error("History entry not found: {0}")]
    HistoryEntryNotFound(String),

    /// The stored value could not be decoded or encoded.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The substrate refused a read or write.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Merged preferences were rejected.
    #[error("Preferences error: {0}")]
    Settings(#[from] SettingsError),
}

impl StoreError {
    /// Whether the error came from input validation rather than the environment
    pub fn is_validation_error(&self) -> bool {
        matches!(self, StoreError::Validation(_) | StoreError::Settings(_))
    }
}

/// Result type alias for substrate operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type alias for project store operations.
pub type StoreResult<T> = Result<T, StoreError>;
