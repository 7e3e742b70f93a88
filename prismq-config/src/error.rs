//! Error types for the prismq-config library.
//!
//! This module provides the error hierarchy for configuration resolution,
//! using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a configuration error.
///
/// # Examples
///
/// ```
/// use prismq_config::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("development".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the prismq-config library.
///
/// Value-absence is never an error: missing optional settings resolve to
/// defaults and absent API keys are reported as `None`. The variants here
/// cover the failures the resolver cannot absorb locally, primarily
/// filesystem problems while setting up the working directory.
#[derive(Debug, Error)]
pub enum Error {
    /// The working directory, settings store file, or one of the managed
    /// data directories could not be created or written.
    ///
    /// This is fatal: resolution cannot complete without a writable
    /// location for the settings store.
    #[error("failed to initialize workspace at {}: {source}", path.display())]
    Workspace {
        /// The path that could not be created or written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings store file could not be read or written.
    #[error("settings store error at {}: {source}", path.display())]
    Store {
        /// Path to the settings store file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O error occurred outside the settings store itself
    /// (e.g., the process current directory could not be determined).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A settings snapshot could not be serialized for output.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A setting value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The setting key that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if this error is a fatal workspace-initialization failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use prismq_config::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::Workspace {
    ///     path: PathBuf::from("/restricted"),
    ///     source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    /// };
    /// assert!(err.is_workspace_failure());
    /// ```
    #[must_use]
    pub fn is_workspace_failure(&self) -> bool {
        matches!(self, Self::Workspace { .. })
    }

    /// Check if this error is a validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
