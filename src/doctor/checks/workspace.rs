//! Workspace presence and structure check.

use std::sync::Arc;

use crate::doctor::check::{Capabilities, Check, CheckContext};
use crate::doctor::report::{Action, Category, CheckResult};
use crate::error::{DojoError, Result};
use crate::workspace::WorkspaceStore;

/// Internal check: the workspace must exist and be structurally complete.
/// A missing workspace is auto-fixable by creating it; a present but broken
/// one is not — the fix could destroy user data.
pub struct WorkspaceCheck {
    store: Arc<dyn WorkspaceStore>,
    workspace_name: String,
    handle: String,
}

impl WorkspaceCheck {
    pub fn new(store: Arc<dyn WorkspaceStore>, workspace_name: &str, handle: &str) -> Self {
        Self {
            store,
            workspace_name: workspace_name.to_string(),
            handle: handle.to_string(),
        }
    }
}

impl Check for WorkspaceCheck {
    fn name(&self) -> &str {
        "workspace"
    }

    fn category(&self) -> Category {
        Category::Internal
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            auto_fix: true,
            critical: true,
        }
    }

    fn probe(&self, ctx: &CheckContext) -> CheckResult {
        if ctx.is_cancelled() {
            return CheckResult::cancelled(self.name(), self.category());
        }

        if !self.store.exists() {
            return CheckResult::critical(self.name(), self.category(), "workspace not found")
                .with_recoverable()
                .with_action(Action::AutoFix);
        }

        match self.store.validate() {
            Ok(()) => CheckResult::healthy(
                self.name(),
                self.category(),
                "workspace present and valid",
            ),
            Err(e) => CheckResult::critical(
                self.name(),
                self.category(),
                "workspace structure is invalid",
            )
            .with_action(Action::ManualFix)
            .with_details(&e.to_string()),
        }
    }

    fn auto_fix(&self, _ctx: &CheckContext) -> Result<()> {
        // Creation only. An existing-but-invalid workspace holds user data
        // and must be repaired by hand.
        if self.store.exists() {
            return Err(DojoError::WorkspaceInvalid {
                message: "auto-fix only creates missing workspaces".to_string(),
            });
        }
        self.store.init(&self.workspace_name, &self.handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doctor::report::Status;
    use crate::workspace::DirWorkspaceStore;
    use std::fs;
    use tempfile::TempDir;

    fn check_in(temp: &TempDir) -> (WorkspaceCheck, Arc<DirWorkspaceStore>) {
        let store = Arc::new(DirWorkspaceStore::new(&temp.path().join("workspace")));
        (
            WorkspaceCheck::new(store.clone(), "practice", "tourist"),
            store,
        )
    }

    #[test]
    fn missing_workspace_is_critical_recoverable_auto_fix() {
        let temp = TempDir::new().unwrap();
        let (check, _) = check_in(&temp);

        let result = check.probe(&CheckContext::default());
        assert_eq!(result.status, Status::Critical);
        assert!(result.recoverable);
        assert_eq!(result.action, Action::AutoFix);
    }

    #[test]
    fn auto_fix_creates_workspace_once() {
        let temp = TempDir::new().unwrap();
        let (check, store) = check_in(&temp);

        check.auto_fix(&CheckContext::default()).unwrap();
        assert!(store.exists());
        assert_eq!(
            check.probe(&CheckContext::default()).status,
            Status::Healthy
        );

        // A second attempt on an existing workspace must refuse
        assert!(check.auto_fix(&CheckContext::default()).is_err());
    }

    #[test]
    fn invalid_workspace_is_critical_manual_fix() {
        let temp = TempDir::new().unwrap();
        let (check, store) = check_in(&temp);
        store.init("practice", "tourist").unwrap();
        fs::remove_dir_all(store.root().join("contests")).unwrap();

        let result = check.probe(&CheckContext::default());
        assert_eq!(result.status, Status::Critical);
        assert!(!result.recoverable);
        assert_eq!(result.action, Action::ManualFix);
        assert!(result.details.unwrap().contains("contests"));
    }

    #[test]
    fn valid_workspace_is_healthy() {
        let temp = TempDir::new().unwrap();
        let (check, store) = check_in(&temp);
        store.init("practice", "tourist").unwrap();

        let result = check.probe(&CheckContext::default());
        assert_eq!(result.status, Status::Healthy);
    }
}
