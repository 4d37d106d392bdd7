//! Workspace storage.
//!
//! A workspace is a directory containing the practice material the tool
//! manages: `problems/` and `contests/` subdirectories plus a
//! `workspace.yml` manifest carrying the schema version header.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DojoError, Result};
use crate::workspace::schema::SchemaVersion;

/// Manifest file name inside a workspace directory.
pub const MANIFEST_FILE: &str = "workspace.yml";

/// Subdirectories every valid workspace must contain.
pub const REQUIRED_DIRS: &[&str] = &["problems", "contests"];

/// Storage interface the diagnostic checks consume.
pub trait WorkspaceStore {
    /// Whether a workspace manifest exists at this store's root.
    fn exists(&self) -> bool;

    /// Structural completeness check: manifest parses and required
    /// subdirectories are present.
    fn validate(&self) -> Result<()>;

    /// Create the workspace. Idempotent: existing directories and an
    /// existing manifest are left untouched.
    fn init(&self, name: &str, handle: &str) -> Result<()>;

    /// Read the raw schema version string from the manifest header.
    fn schema_version(&self) -> Result<String>;
}

/// Persisted workspace manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceManifest {
    /// Schema version header, `major.minor.patch`.
    pub version: String,

    /// Entity kind tag, always "workspace".
    #[serde(rename = "type")]
    pub kind: String,

    /// Display name of the workspace.
    pub name: String,

    /// Judge handle the workspace is synchronized for.
    pub handle: String,

    /// When the workspace was created.
    pub created_at: DateTime<Utc>,
}

impl WorkspaceManifest {
    pub fn new(name: &str, handle: &str) -> Self {
        Self {
            version: SchemaVersion::CURRENT.to_string(),
            kind: "workspace".to_string(),
            name: name.to_string(),
            handle: handle.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Only the header fields of a persisted entity. Used when the caller needs
/// the version without committing to the entity's full shape.
#[derive(Debug, Clone, Deserialize)]
struct VersionHeader {
    version: String,
}

/// Directory-backed workspace store.
#[derive(Debug, Clone)]
pub struct DirWorkspaceStore {
    root: PathBuf,
}

impl DirWorkspaceStore {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Load and parse the full manifest.
    pub fn load_manifest(&self) -> Result<WorkspaceManifest> {
        let path = self.manifest_path();
        if !path.exists() {
            return Err(DojoError::WorkspaceMissing {
                path: self.root.clone(),
            });
        }
        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content).map_err(|e| DojoError::ParseError {
            path,
            message: e.to_string(),
        })
    }
}

impl WorkspaceStore for DirWorkspaceStore {
    fn exists(&self) -> bool {
        self.manifest_path().is_file()
    }

    fn validate(&self) -> Result<()> {
        let manifest = self.load_manifest()?;
        if manifest.kind != "workspace" {
            return Err(DojoError::WorkspaceInvalid {
                message: format!("manifest type is '{}', expected 'workspace'", manifest.kind),
            });
        }
        for dir in REQUIRED_DIRS {
            if !self.root.join(dir).is_dir() {
                return Err(DojoError::WorkspaceInvalid {
                    message: format!("missing {dir}/ directory"),
                });
            }
        }
        Ok(())
    }

    fn init(&self, name: &str, handle: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        for dir in REQUIRED_DIRS {
            fs::create_dir_all(self.root.join(dir))?;
        }

        let path = self.manifest_path();
        if path.exists() {
            tracing::debug!("workspace manifest already present at {}", path.display());
            return Ok(());
        }

        let manifest = WorkspaceManifest::new(name, handle);
        let content = serde_yaml::to_string(&manifest).map_err(|e| DojoError::ParseError {
            path: path.clone(),
            message: e.to_string(),
        })?;
        fs::write(&path, content)?;
        tracing::info!("created workspace at {}", self.root.display());
        Ok(())
    }

    fn schema_version(&self) -> Result<String> {
        let path = self.manifest_path();
        let content = fs::read_to_string(&path)?;
        let header: VersionHeader =
            serde_yaml::from_str(&content).map_err(|e| DojoError::ParseError {
                path,
                message: e.to_string(),
            })?;
        Ok(header.version)
    }
}
