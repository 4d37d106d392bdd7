//! Diagnostic orchestration.
//!
//! The `Checker` drives registered checks strictly sequentially, in
//! registration order, across two phases: internal checks first, then —
//! only if nothing blocked — external checks. One `Report` is built per
//! `run` call and owned by the orchestrator until returned. A `Checker`
//! instance is not safe for concurrent runs; callers needing concurrent
//! diagnostics use independent instances.

use std::time::Instant;

use crate::doctor::check::{Capabilities, Check, CheckContext};
use crate::doctor::report::{Action, Category, Report, Status};
use crate::workspace::SchemaVersion;

struct RegisteredCheck {
    check: Box<dyn Check>,
    caps: Capabilities,
}

/// Orchestrator holding an ordered list of checks.
pub struct Checker {
    checks: Vec<RegisteredCheck>,
    schema_version: String,
}

impl Default for Checker {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker {
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            schema_version: SchemaVersion::CURRENT.to_string(),
        }
    }

    /// Register a check. Its capabilities are resolved here, once, and used
    /// for every subsequent run.
    pub fn register(&mut self, check: Box<dyn Check>) {
        let caps = check.capabilities();
        tracing::debug!(
            "registered check '{}' ({}, auto_fix={}, critical={})",
            check.name(),
            check.category(),
            caps.auto_fix,
            caps.critical
        );
        self.checks.push(RegisteredCheck { check, caps });
    }

    /// Number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run full diagnostics and fold every outcome into a fresh report.
    ///
    /// Phase 1 runs internal checks in registration order and stops the
    /// moment the report becomes non-proceedable; the remaining internal
    /// checks are skipped for this run, not deferred. Phase 2 runs external
    /// checks unconditionally, but only when phase 1 left the run
    /// proceedable.
    pub fn run(&self, ctx: &CheckContext) -> Report {
        let started = Instant::now();
        let mut report = Report::new(&self.schema_version);

        for reg in self.phase(Category::Internal) {
            self.process_one(reg, ctx, &mut report);
            if !report.can_proceed {
                tracing::warn!(
                    "'{}' blocked the run; skipping remaining checks",
                    reg.check.name()
                );
                break;
            }
        }

        if report.can_proceed {
            for reg in self.phase(Category::External) {
                self.process_one(reg, ctx, &mut report);
            }
        }

        report.duration = started.elapsed();
        tracing::info!(
            "diagnostics finished: {} ({} results, can_proceed={})",
            report.overall,
            report.results.len(),
            report.can_proceed
        );
        report
    }

    /// Lightweight readiness probe. Runs every registered check regardless
    /// of category, never invokes auto-fix and builds no report; returns
    /// false at the first Critical result from an effectively critical
    /// check.
    pub fn quick_check(&self, ctx: &CheckContext) -> bool {
        for reg in &self.checks {
            let result = reg.check.probe(ctx);
            if result.status == Status::Critical && reg.caps.critical {
                tracing::debug!("quick check failed at '{}': {}", result.name, result.message);
                return false;
            }
        }
        true
    }

    fn phase(&self, category: Category) -> impl Iterator<Item = &RegisteredCheck> {
        self.checks
            .iter()
            .filter(move |reg| reg.check.category() == category)
    }

    fn process_one(&self, reg: &RegisteredCheck, ctx: &CheckContext, report: &mut Report) {
        let started = Instant::now();
        let mut result = reg.check.probe(ctx);
        result.duration = started.elapsed();
        tracing::debug!("'{}' probed: {} — {}", result.name, result.status, result.message);

        // One remediation attempt per Critical detection. On success the
        // report records a Healthy replacement for this entry and nothing
        // lands in warnings or errors.
        if result.status == Status::Critical
            && result.recoverable
            && result.action == Action::AutoFix
            && reg.caps.auto_fix
        {
            match reg.check.auto_fix(ctx) {
                Ok(()) => {
                    tracing::info!("'{}' auto-fixed", result.name);
                    report.results.push(result.into_auto_fixed());
                    return;
                }
                Err(e) => {
                    tracing::warn!("auto-fix for '{}' failed: {}", result.name, e);
                }
            }
        }

        let status = result.status;
        let message = result.message.clone();
        report.results.push(result);

        match status {
            Status::Critical => {
                if reg.caps.critical {
                    report.escalate(Status::Critical);
                    report.can_proceed = false;
                    report.errors.push(message);
                } else {
                    report.escalate(Status::Degraded);
                    report.warnings.push(message);
                }
            }
            Status::Degraded => {
                report.escalate(Status::Degraded);
                report.warnings.push(message);
            }
            Status::Healthy => {}
        }
    }
}
