//! CLI command implementations.

pub mod dispatcher;
pub mod doctor;
pub mod init;
pub mod status;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
