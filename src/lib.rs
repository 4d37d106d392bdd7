//! Dojo - local practice workspace management for a remote judge.
//!
//! Dojo keeps a locally-persisted practice workspace (problems, contests,
//! submissions-in-progress) synchronized against a remote judge platform,
//! and diagnoses whether its local and remote dependencies are in a usable
//! state before higher-level commands run.
//!
//! # Modules
//!
//! - [`cancel`] - Cooperative cancellation token shared with blocking probes
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration and credential storage
//! - [`doctor`] - Diagnostic check orchestration and reporting
//! - [`error`] - Error types and result aliases
//! - [`remote`] - Judge platform client, session, and structure verifier
//! - [`ui`] - Terminal output and report rendering
//! - [`workspace`] - Workspace storage and schema versioning
//!
//! # Example
//!
//! ```
//! use dojo::workspace::SchemaVersion;
//!
//! let old: SchemaVersion = "1.0.0".parse().unwrap();
//! let current: SchemaVersion = "1.1.0".parse().unwrap();
//! assert!(old.is_compatible(&current));
//! assert!(old.needs_migration(&current));
//! ```

pub mod cancel;
pub mod cli;
pub mod config;
pub mod doctor;
pub mod error;
pub mod remote;
pub mod ui;
pub mod workspace;

pub use error::{DojoError, Result};
