//! Configuration and credential storage.

pub mod credentials;
pub mod store;

pub use credentials::Credentials;
pub use store::{Config, ConfigStore, FileConfigStore, CONFIG_FILE, DEFAULT_JUDGE_URL};
