//! Error types for xcversion operations.
//!
//! This module defines [`XcversionError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `XcversionError` for the failures a user can act on
//! - Use `anyhow::Error` (via `XcversionError::Other`) for collaborator
//!   failures (discovery, file reads) that are passed through untouched
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for xcversion operations.
#[derive(Debug, Error)]
pub enum XcversionError {
    /// The requirement string is syntactically malformed.
    #[error("Invalid version requirement '{requirement}': {reason} (at '{offending}')")]
    InvalidRequirement {
        requirement: String,
        offending: String,
        reason: String,
    },

    /// No requirement was supplied and no version file could be found.
    #[error("No version requirement supplied and no {version_file} file found")]
    MissingRequirement { version_file: String },

    /// The requirement parsed, but no installed Xcode satisfies it.
    #[error("Cannot find an installed Xcode satisfying '{requirement}'")]
    NoMatchingInstallation { requirement: String },

    /// Configuration file not found at an explicitly given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A child command could not be run.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl XcversionError {
    /// Build an [`XcversionError::InvalidRequirement`].
    pub(crate) fn invalid_requirement(
        requirement: &str,
        offending: &str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidRequirement {
            requirement: requirement.to_string(),
            offending: offending.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for xcversion operations.
pub type Result<T> = std::result::Result<T, XcversionError>;
