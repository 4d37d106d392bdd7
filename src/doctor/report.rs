//! Diagnostic result and report data model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Severity of a single check outcome, ordered: Healthy < Degraded < Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Healthy,
    Degraded,
    Critical,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// Execution phase a check belongs to. Internal checks concern local state,
/// external checks concern remote dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Internal,
    External,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Internal => "internal",
            Self::External => "external",
        };
        f.write_str(s)
    }
}

/// Suggested follow-up for a non-healthy result. Advisory metadata: the
/// orchestrator only ever acts on `AutoFix`, and only per the rules in
/// [`crate::doctor::Checker`]. `Retry` in particular is never auto-executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    #[default]
    None,
    AutoFix,
    UserPrompt,
    Retry,
    ManualFix,
}

/// Outcome of one check invocation. Immutable once returned by a probe;
/// a successful auto-fix produces a replacement value via
/// [`CheckResult::into_auto_fixed`] rather than mutating this one.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub category: Category,
    pub status: Status,
    pub message: String,
    pub details: Option<String>,
    pub recoverable: bool,
    pub action: Action,
    pub duration: Duration,
}

impl CheckResult {
    pub fn new(name: &str, category: Category, status: Status, message: &str) -> Self {
        Self {
            name: name.to_string(),
            category,
            status,
            message: message.to_string(),
            details: None,
            recoverable: false,
            action: Action::None,
            duration: Duration::ZERO,
        }
    }

    pub fn healthy(name: &str, category: Category, message: &str) -> Self {
        Self::new(name, category, Status::Healthy, message)
    }

    pub fn degraded(name: &str, category: Category, message: &str) -> Self {
        Self::new(name, category, Status::Degraded, message)
    }

    pub fn critical(name: &str, category: Category, message: &str) -> Self {
        Self::new(name, category, Status::Critical, message)
    }

    /// Result a probe returns when it observed cancellation instead of
    /// completing its work.
    pub fn cancelled(name: &str, category: Category) -> Self {
        Self::degraded(name, category, "check cancelled before completion")
    }

    pub fn with_details(mut self, details: &str) -> Self {
        self.details = Some(details.to_string());
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    pub fn with_recoverable(mut self) -> Self {
        self.recoverable = true;
        self
    }

    /// Replacement value recorded after this result's check was successfully
    /// auto-fixed: same identity, Healthy, message suffixed accordingly.
    pub(crate) fn into_auto_fixed(mut self) -> Self {
        self.status = Status::Healthy;
        self.message.push_str(" (auto-fixed)");
        self
    }
}

/// Aggregate outcome of one orchestration run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// When the run started.
    pub timestamp: DateTime<Utc>,

    /// Maximum effective severity seen so far. Only ever escalates.
    pub overall: Status,

    /// Whether higher-level functionality may proceed. Turns false at most
    /// once per run and stays false.
    pub can_proceed: bool,

    /// Schema version this build of the tool writes.
    pub schema_version: String,

    /// Per-check outcomes in execution order.
    pub results: Vec<CheckResult>,

    /// Non-blocking problem messages in the order they were detected.
    pub warnings: Vec<String>,

    /// Blocking problem messages in the order they were detected.
    pub errors: Vec<String>,

    /// Wall-clock time of the whole run.
    pub duration: Duration,
}

impl Report {
    pub fn new(schema_version: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            overall: Status::Healthy,
            can_proceed: true,
            schema_version: schema_version.to_string(),
            results: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    /// Raise the overall status to `status` if it is more severe.
    pub(crate) fn escalate(&mut self, status: Status) {
        if status > self.overall {
            self.overall = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_severity_is_ordered() {
        assert!(Status::Healthy < Status::Degraded);
        assert!(Status::Degraded < Status::Critical);
    }

    #[test]
    fn new_result_has_no_action_and_is_not_recoverable() {
        let result = CheckResult::healthy("config", Category::Internal, "ok");
        assert_eq!(result.action, Action::None);
        assert!(!result.recoverable);
        assert!(result.details.is_none());
        assert_eq!(result.duration, Duration::ZERO);
    }

    #[test]
    fn builders_set_fields() {
        let result = CheckResult::critical("workspace", Category::Internal, "missing")
            .with_recoverable()
            .with_action(Action::AutoFix)
            .with_details("expected at ~/.dojo/workspace");
        assert_eq!(result.status, Status::Critical);
        assert!(result.recoverable);
        assert_eq!(result.action, Action::AutoFix);
        assert_eq!(result.details.as_deref(), Some("expected at ~/.dojo/workspace"));
    }

    #[test]
    fn auto_fixed_replacement_is_healthy_with_suffix() {
        let original = CheckResult::critical("workspace", Category::Internal, "missing")
            .with_recoverable()
            .with_action(Action::AutoFix);
        let fixed = original.into_auto_fixed();
        assert_eq!(fixed.status, Status::Healthy);
        assert_eq!(fixed.message, "missing (auto-fixed)");
        assert_eq!(fixed.name, "workspace");
    }

    #[test]
    fn cancelled_result_is_degraded() {
        let result = CheckResult::cancelled("ping", Category::External);
        assert_eq!(result.status, Status::Degraded);
        assert!(result.message.contains("cancelled"));
    }

    #[test]
    fn fresh_report_is_healthy_and_proceedable() {
        let report = Report::new("1.1.0");
        assert_eq!(report.overall, Status::Healthy);
        assert!(report.can_proceed);
        assert_eq!(report.schema_version, "1.1.0");
        assert!(report.results.is_empty());
    }

    #[test]
    fn escalate_never_decreases() {
        let mut report = Report::new("1.1.0");
        report.escalate(Status::Critical);
        report.escalate(Status::Degraded);
        assert_eq!(report.overall, Status::Critical);
    }

    #[test]
    fn report_serializes_to_json() {
        let mut report = Report::new("1.1.0");
        report
            .results
            .push(CheckResult::healthy("config", Category::Internal, "ok"));
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"overall\":\"healthy\""));
        assert!(json.contains("\"category\":\"internal\""));
    }
}
