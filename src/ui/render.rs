//! Textual rendering of a diagnostic report.

use console::style;
use std::fmt::Write as _;
use std::time::Duration;

use crate::doctor::{Report, Status};
use crate::ui::status_icon;

/// Render a full report for terminal display.
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} (schema {})",
        style("Doctor report").bold(),
        report.schema_version
    );
    let _ = writeln!(out);

    let name_width = report
        .results
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0);

    for result in &report.results {
        let _ = writeln!(
            out,
            "  {} {:name_width$}  {} ({})",
            status_icon(result.status),
            result.name,
            result.message,
            format_duration(result.duration),
        );
        if let Some(details) = &result.details {
            let _ = writeln!(out, "    {}", style(details).dim());
        }
    }

    if !report.warnings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style("Warnings:").yellow().bold());
        for warning in &report.warnings {
            let _ = writeln!(out, "  - {warning}");
        }
    }

    if !report.errors.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style("Errors:").red().bold());
        for error in &report.errors {
            let _ = writeln!(out, "  - {error}");
        }
    }

    let _ = writeln!(out);
    let verdict = if report.can_proceed {
        "safe to proceed"
    } else {
        "blocked"
    };
    let _ = writeln!(
        out,
        "Overall: {} — {} ({})",
        styled_status(report.overall),
        verdict,
        format_duration(report.duration),
    );

    out
}

fn styled_status(status: Status) -> String {
    match status {
        Status::Healthy => style("healthy").green().to_string(),
        Status::Degraded => style("degraded").yellow().to_string(),
        Status::Critical => style("critical").red().to_string(),
    }
}

fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis >= 1000 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        format!("{millis}ms")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doctor::{Category, CheckResult};

    fn sample_report() -> Report {
        let mut report = Report::new("1.1.0");
        report
            .results
            .push(CheckResult::healthy("config", Category::Internal, "configuration loaded"));
        report.results.push(
            CheckResult::degraded("credentials", Category::Internal, "no clearance cookie")
                .with_details("log in on the judge"),
        );
        report.warnings.push("no clearance cookie".to_string());
        report.overall = Status::Degraded;
        report
    }

    #[test]
    fn renders_every_result_line() {
        let rendered = render_report(&sample_report());
        assert!(rendered.contains("config"));
        assert!(rendered.contains("configuration loaded"));
        assert!(rendered.contains("credentials"));
        assert!(rendered.contains("no clearance cookie"));
    }

    #[test]
    fn renders_details_and_warnings_sections() {
        let rendered = render_report(&sample_report());
        assert!(rendered.contains("log in on the judge"));
        assert!(rendered.contains("Warnings:"));
    }

    #[test]
    fn renders_verdict_line() {
        let rendered = render_report(&sample_report());
        assert!(rendered.contains("safe to proceed"));

        let mut blocked = sample_report();
        blocked.can_proceed = false;
        blocked.overall = Status::Critical;
        blocked.errors.push("workspace broken".to_string());
        let rendered = render_report(&blocked);
        assert!(rendered.contains("blocked"));
        assert!(rendered.contains("Errors:"));
    }

    #[test]
    fn formats_durations_human_readable() {
        assert_eq!(format_duration(Duration::from_millis(42)), "42ms");
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.5s");
    }
}
