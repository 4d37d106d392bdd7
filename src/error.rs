//! Error types for dojo operations.
//!
//! This module defines [`DojoError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DojoError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DojoError::Other`) for unexpected errors
//! - Faults inside a diagnostic check never propagate out of its probe;
//!   they are converted into the check's result instead

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dojo operations.
#[derive(Debug, Error)]
pub enum DojoError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a persisted YAML file.
    #[error("Failed to parse {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// A schema version string that is not a `major.minor.patch` triple
    /// of non-negative integers.
    #[error("Invalid schema version '{value}'")]
    InvalidVersion { value: String },

    /// Workspace directory does not exist.
    #[error("Workspace not found: {path}")]
    WorkspaceMissing { path: PathBuf },

    /// Workspace exists but its structure is incomplete or corrupt.
    #[error("Invalid workspace: {message}")]
    WorkspaceInvalid { message: String },

    /// Credentials are missing, unreadable, or expired.
    #[error("Credential error: {message}")]
    CredentialError { message: String },

    /// The judge platform could not be reached or answered abnormally.
    #[error("Remote error: {message}")]
    RemoteError { message: String },

    /// The judge's page layout no longer matches what the scraper expects.
    #[error("Remote structure mismatch (layout {layout}): {message}")]
    StructureMismatch { layout: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for dojo operations.
pub type Result<T> = std::result::Result<T, DojoError>;
