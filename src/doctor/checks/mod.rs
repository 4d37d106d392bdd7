//! Concrete diagnostic checks.

pub mod config;
pub mod credentials;
pub mod remote;
pub mod schema;
pub mod workspace;

pub use config::ConfigCheck;
pub use credentials::CredentialsCheck;
pub use remote::{PingCheck, SessionExpiryCheck, StructureCheck};
pub use schema::SchemaCheck;
pub use workspace::WorkspaceCheck;
