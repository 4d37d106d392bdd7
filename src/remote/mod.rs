//! Judge platform client, session, and page-structure verifier.

pub mod client;
pub mod session;
pub mod verifier;

pub use client::{HttpRemoteClient, RemoteClient, UserInfo};
pub use session::Session;
pub use verifier::{PageStructureVerifier, StructureVerifier, LAYOUT_VERSION};
