//! Error types for FYI startup and configuration.
//!
//! [`FyiError`] covers everything that can go wrong before the dashboard
//! loop starts. Failures of the data sources during the loop are never
//! surfaced through this type; they degrade the displayed data instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`FyiError`].
pub type Result<T> = std::result::Result<T, FyiError>;

/// Errors raised while preparing the dashboard.
#[derive(Debug, Error)]
pub enum FyiError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Configuration file not found
    #[error("Configuration not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file is invalid YAML
    #[error("Invalid configuration at {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    /// Configuration validation failed
    #[error("Configuration validation failed: {message}")]
    ConfigValidation { message: String },

    /// Environment file could not be loaded
    #[error("Failed to load environment file {path}: {message}")]
    EnvFile { path: PathBuf, message: String },

    // =========================================================================
    // I/O Errors
    // =========================================================================
    /// Generic I/O error with context
    #[error("I/O error {operation}: {path}")]
    Io {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory creation failed
    #[error("Failed to create directory: {path}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // Internal Errors
    // =========================================================================
    /// Internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl FyiError {
    /// Create a ConfigNotFound error
    pub fn config_not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigNotFound {
            path: path.into(),
            source: Some(source),
        }
    }

    /// Create a ConfigValidation error
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io(operation: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns actionable guidance for the user
    pub fn guidance(&self) -> Option<&'static str> {
        match self {
            Self::ConfigNotFound { .. } => Some("Check the path passed to --config"),
            Self::ConfigInvalid { .. } => Some("Check the YAML syntax of the configuration file"),
            Self::EnvFile { .. } => Some("Lines in the env file must look like KEY=value"),
            Self::DirectoryCreation { .. } => Some("Pass a writable directory with --log-dir"),
            _ => None,
        }
    }
}
