//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dojo - practice workspace management for a remote judge.
#[derive(Debug, Parser)]
#[command(name = "dojo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config directory (overrides default ~/.dojo)
    #[arg(long, global = true, env = "DOJO_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Path to the workspace (overrides default <config-dir>/workspace)
    #[arg(short, long, global = true, env = "DOJO_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Diagnose local and remote dependencies (default if no command given)
    Doctor(DoctorArgs),

    /// Initialize configuration and create the workspace
    Init(InitArgs),

    /// Show configuration summary and readiness
    Status(StatusArgs),
}

/// Arguments for the `doctor` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DoctorArgs {
    /// Fast readiness probe instead of the full report
    #[arg(long)]
    pub quick: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip checks that talk to the judge
    #[arg(long)]
    pub offline: bool,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InitArgs {
    /// Judge handle to store in the configuration
    #[arg(long)]
    pub handle: Option<String>,

    /// Workspace display name
    #[arg(long)]
    pub name: Option<String>,

    /// Judge platform base URL
    #[arg(long)]
    pub judge_url: Option<String>,

    /// Overwrite an existing configuration
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, clap::Args)]
pub struct StatusArgs {}
