//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, DoctorArgs};
use crate::error::Result;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, returning a [`CommandResult`] with the exit code.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config_root: PathBuf,
    workspace_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher rooted at the given config and workspace paths.
    pub fn new(config_root: PathBuf, workspace_root: PathBuf) -> Self {
        Self {
            config_root,
            workspace_root,
        }
    }

    pub fn config_root(&self) -> &Path {
        &self.config_root
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Route the CLI subcommand to its implementation and execute it.
    /// With no subcommand, a default full doctor run is performed.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Doctor(args)) => {
                let cmd = super::doctor::DoctorCommand::new(
                    &self.config_root,
                    &self.workspace_root,
                    args.clone(),
                );
                cmd.execute()
            }
            Some(Commands::Init(args)) => {
                let cmd = super::init::InitCommand::new(
                    &self.config_root,
                    &self.workspace_root,
                    args.clone(),
                );
                cmd.execute()
            }
            Some(Commands::Status(args)) => {
                let cmd = super::status::StatusCommand::new(
                    &self.config_root,
                    &self.workspace_root,
                    args.clone(),
                );
                cmd.execute()
            }
            None => {
                let cmd = super::doctor::DoctorCommand::new(
                    &self.config_root,
                    &self.workspace_root,
                    DoctorArgs::default(),
                );
                cmd.execute()
            }
        }
    }
}
