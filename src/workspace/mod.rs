//! Workspace storage and schema versioning.

pub mod schema;
pub mod store;

pub use schema::SchemaVersion;
pub use store::{DirWorkspaceStore, WorkspaceManifest, WorkspaceStore, MANIFEST_FILE};
