//! Workspace schema-version check.

use std::sync::Arc;

use crate::doctor::check::{Check, CheckContext};
use crate::doctor::report::{Action, Category, CheckResult};
use crate::workspace::{SchemaVersion, WorkspaceStore};

/// Internal check mapping schema compatibility onto three outcomes:
/// major mismatch is a hard break, a same-major difference is a migratable
/// degradation, an exact match is healthy. A workspace that does not exist
/// yet has nothing to check.
pub struct SchemaCheck {
    store: Arc<dyn WorkspaceStore>,
    current: SchemaVersion,
}

impl SchemaCheck {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self::with_current(store, SchemaVersion::CURRENT)
    }

    pub fn with_current(store: Arc<dyn WorkspaceStore>, current: SchemaVersion) -> Self {
        Self { store, current }
    }
}

impl Check for SchemaCheck {
    fn name(&self) -> &str {
        "schema"
    }

    fn category(&self) -> Category {
        Category::Internal
    }

    fn probe(&self, ctx: &CheckContext) -> CheckResult {
        if ctx.is_cancelled() {
            return CheckResult::cancelled(self.name(), self.category());
        }

        if !self.store.exists() {
            return CheckResult::healthy(
                self.name(),
                self.category(),
                "no workspace yet, nothing to check",
            );
        }

        // "cannot read" is reported distinctly from "incompatible":
        // a read or parse fault carries no suggested action.
        let raw = match self.store.schema_version() {
            Ok(raw) => raw,
            Err(e) => {
                return CheckResult::critical(
                    self.name(),
                    self.category(),
                    "cannot read workspace schema version",
                )
                .with_details(&e.to_string());
            }
        };

        let old: SchemaVersion = match raw.parse() {
            Ok(version) => version,
            Err(e) => {
                return CheckResult::critical(
                    self.name(),
                    self.category(),
                    "cannot parse workspace schema version",
                )
                .with_details(&e.to_string());
            }
        };

        if !old.is_compatible(&self.current) {
            CheckResult::critical(
                self.name(),
                self.category(),
                &format!(
                    "workspace schema {} is incompatible with tool schema {}",
                    old, self.current
                ),
            )
            .with_action(Action::ManualFix)
        } else if old.needs_migration(&self.current) {
            CheckResult::degraded(
                self.name(),
                self.category(),
                &format!("workspace schema {} can migrate to {}", old, self.current),
            )
            .with_recoverable()
            .with_action(Action::UserPrompt)
        } else {
            CheckResult::healthy(
                self.name(),
                self.category(),
                &format!("workspace schema {} is current", old),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doctor::report::Status;
    use crate::workspace::{DirWorkspaceStore, MANIFEST_FILE};
    use std::fs;
    use tempfile::TempDir;

    fn workspace_with_version(temp: &TempDir, version: &str) -> Arc<DirWorkspaceStore> {
        let store = Arc::new(DirWorkspaceStore::new(&temp.path().join("workspace")));
        store.init("practice", "tourist").unwrap();
        fs::write(
            store.root().join(MANIFEST_FILE),
            format!("version: \"{version}\"\ntype: workspace\nname: practice\nhandle: tourist\ncreated_at: 2026-01-01T00:00:00Z\n"),
        )
        .unwrap();
        store
    }

    fn current() -> SchemaVersion {
        SchemaVersion::new(1, 1, 0)
    }

    #[test]
    fn absent_workspace_is_healthy() {
        let temp = TempDir::new().unwrap();
        let store = Arc::new(DirWorkspaceStore::new(&temp.path().join("workspace")));
        let check = SchemaCheck::with_current(store, current());

        let result = check.probe(&CheckContext::default());
        assert_eq!(result.status, Status::Healthy);
        assert!(result.message.contains("nothing to check"));
    }

    #[test]
    fn exact_match_is_healthy() {
        let temp = TempDir::new().unwrap();
        let store = workspace_with_version(&temp, "1.1.0");
        let check = SchemaCheck::with_current(store, current());

        let result = check.probe(&CheckContext::default());
        assert_eq!(result.status, Status::Healthy);
        assert_eq!(result.action, Action::None);
    }

    #[test]
    fn migratable_version_is_degraded_user_prompt() {
        let temp = TempDir::new().unwrap();
        let store = workspace_with_version(&temp, "1.0.2");
        let check = SchemaCheck::with_current(store, current());

        let result = check.probe(&CheckContext::default());
        assert_eq!(result.status, Status::Degraded);
        assert!(result.recoverable);
        assert_eq!(result.action, Action::UserPrompt);
        assert!(result.message.contains("1.0.2"));
    }

    #[test]
    fn major_mismatch_is_critical_manual_fix() {
        let temp = TempDir::new().unwrap();
        let store = workspace_with_version(&temp, "2.0.0");
        let check = SchemaCheck::with_current(store, current());

        let result = check.probe(&CheckContext::default());
        assert_eq!(result.status, Status::Critical);
        assert_eq!(result.action, Action::ManualFix);
        assert!(result.message.contains("incompatible"));
    }

    #[test]
    fn unreadable_manifest_is_critical_with_no_action() {
        let temp = TempDir::new().unwrap();
        let store = workspace_with_version(&temp, "1.1.0");
        fs::write(store.root().join(MANIFEST_FILE), "\t:::bad").unwrap();
        let check = SchemaCheck::with_current(store, current());

        let result = check.probe(&CheckContext::default());
        assert_eq!(result.status, Status::Critical);
        assert_eq!(result.action, Action::None);
        assert!(result.message.contains("cannot read"));
    }

    #[test]
    fn malformed_version_string_is_critical_with_no_action() {
        let temp = TempDir::new().unwrap();
        let store = workspace_with_version(&temp, "not.a.version");
        let check = SchemaCheck::with_current(store, current());

        let result = check.probe(&CheckContext::default());
        assert_eq!(result.status, Status::Critical);
        assert_eq!(result.action, Action::None);
        assert!(result.message.contains("cannot parse"));
    }
}
