//! Terminal output and report rendering.

pub mod render;

pub use render::render_report;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::doctor::Status;

/// Unicode icon for a check status, styled for TTY output.
pub fn status_icon(status: Status) -> String {
    match status {
        Status::Healthy => style("✓").green().to_string(),
        Status::Degraded => style("⚠").yellow().to_string(),
        Status::Critical => style("✗").red().to_string(),
    }
}

/// Spinner shown while the doctor runs its checks.
pub fn doctor_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message("running diagnostics...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Print an error line to stderr.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a success line.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an informational line.
pub fn info(msg: &str) {
    println!("{msg}");
}
