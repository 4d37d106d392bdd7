//! Configuration storage.
//!
//! Dojo keeps its configuration in a single YAML file, by default
//! `~/.dojo/config.yml`. Like every persisted entity it carries a
//! `{version, type}` header.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials::Credentials;
use crate::error::{DojoError, Result};
use crate::workspace::SchemaVersion;

/// Config file name inside the config root.
pub const CONFIG_FILE: &str = "config.yml";

/// Default judge platform URL.
pub const DEFAULT_JUDGE_URL: &str = "https://judge.dojo.dev";

/// Storage interface the diagnostic checks consume.
pub trait ConfigStore {
    /// Load the configuration, or `None` when absent or unreadable.
    fn get(&self) -> Option<Config>;

    /// Whether a non-empty handle is configured.
    fn has_handle(&self) -> bool;

    /// Whether a non-empty clearance cookie is stored.
    fn has_cookie(&self) -> bool;

    /// Write the given seed configuration, creating parent directories.
    fn init(&self, seed: &Config) -> Result<()>;

    /// The configured handle, or empty string when absent.
    fn get_handle(&self) -> String;

    /// Load the credential view of the configuration.
    fn load_credentials(&self) -> Result<Credentials>;
}

/// Persisted configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version header, `major.minor.patch`.
    pub version: String,

    /// Entity kind tag, always "config".
    #[serde(rename = "type")]
    pub kind: String,

    /// Judge handle.
    #[serde(default)]
    pub handle: Option<String>,

    /// Clearance cookie issued by the judge's login flow.
    #[serde(default)]
    pub clearance: Option<String>,

    /// When the clearance cookie expires, if the login flow reported it.
    #[serde(default)]
    pub clearance_expires_at: Option<DateTime<Utc>>,

    /// Base URL of the judge platform.
    #[serde(default = "default_judge_url")]
    pub judge_url: String,

    /// Workspace display name used when initializing a workspace.
    #[serde(default = "default_workspace_name")]
    pub workspace_name: String,
}

fn default_judge_url() -> String {
    DEFAULT_JUDGE_URL.to_string()
}

fn default_workspace_name() -> String {
    "practice".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SchemaVersion::CURRENT.to_string(),
            kind: "config".to_string(),
            handle: None,
            clearance: None,
            clearance_expires_at: None,
            judge_url: default_judge_url(),
            workspace_name: default_workspace_name(),
        }
    }
}

/// File-backed config store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    root: PathBuf,
}

impl FileConfigStore {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Default config root, `~/.dojo`.
    pub fn default_root() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(".dojo")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Load the configuration, distinguishing absence from corruption.
    pub fn load(&self) -> Result<Config> {
        let path = self.config_path();
        if !path.exists() {
            return Err(DojoError::ConfigNotFound { path });
        }
        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content).map_err(|e| DojoError::ParseError {
            path,
            message: e.to_string(),
        })
    }
}

impl ConfigStore for FileConfigStore {
    fn get(&self) -> Option<Config> {
        match self.load() {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::debug!("config unavailable: {}", e);
                None
            }
        }
    }

    fn has_handle(&self) -> bool {
        self.get()
            .and_then(|c| c.handle)
            .is_some_and(|h| !h.is_empty())
    }

    fn has_cookie(&self) -> bool {
        self.get()
            .and_then(|c| c.clearance)
            .is_some_and(|c| !c.is_empty())
    }

    fn init(&self, seed: &Config) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.config_path();
        let content = serde_yaml::to_string(seed).map_err(|e| DojoError::ParseError {
            path: path.clone(),
            message: e.to_string(),
        })?;
        fs::write(&path, content)?;
        tracing::info!("wrote configuration to {}", path.display());
        Ok(())
    }

    fn get_handle(&self) -> String {
        self.get().and_then(|c| c.handle).unwrap_or_default()
    }

    fn load_credentials(&self) -> Result<Credentials> {
        let config = self.load().map_err(|e| DojoError::CredentialError {
            message: e.to_string(),
        })?;
        Ok(Credentials {
            handle: config.handle,
            clearance: config.clearance,
            expires_at: config.clearance_expires_at,
        })
    }
}
