//! Dojo CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use dojo::cli::{Cli, CommandDispatcher};
use dojo::config::FileConfigStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("dojo=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dojo=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("dojo starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let config_root = cli
        .config_dir
        .clone()
        .unwrap_or_else(FileConfigStore::default_root);
    let workspace_root = cli
        .workspace
        .clone()
        .unwrap_or_else(|| config_root.join("workspace"));

    let dispatcher = CommandDispatcher::new(config_root, workspace_root);

    match dispatcher.dispatch(&cli) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            dojo::ui::error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
