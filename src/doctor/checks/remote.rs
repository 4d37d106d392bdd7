//! External checks against the judge platform.
//!
//! None of these can block proceeding: the tool stays useful offline, so
//! every remote problem is at most a degradation.

use chrono::Duration;
use std::sync::Arc;

use crate::config::ConfigStore;
use crate::doctor::check::{Capabilities, Check, CheckContext};
use crate::doctor::report::{Action, Category, CheckResult};
use crate::remote::{RemoteClient, StructureVerifier};

const NON_CRITICAL: Capabilities = Capabilities {
    auto_fix: false,
    critical: false,
};

/// Remaining clearance lifetime below which the expiry check starts warning.
const EXPIRY_WARNING_HOURS: i64 = 48;

/// External check: is the judge reachable at all. Failures are transient by
/// assumption and marked for retry; the orchestrator never retries itself.
pub struct PingCheck {
    client: Arc<dyn RemoteClient>,
}

impl PingCheck {
    pub fn new(client: Arc<dyn RemoteClient>) -> Self {
        Self { client }
    }
}

impl Check for PingCheck {
    fn name(&self) -> &str {
        "remote"
    }

    fn category(&self) -> Category {
        Category::External
    }

    fn capabilities(&self) -> Capabilities {
        NON_CRITICAL
    }

    fn probe(&self, ctx: &CheckContext) -> CheckResult {
        if ctx.is_cancelled() {
            return CheckResult::cancelled(self.name(), self.category());
        }

        match self.client.ping(ctx.cancel_token()) {
            Ok(()) => CheckResult::healthy(self.name(), self.category(), "judge reachable"),
            Err(e) => CheckResult::degraded(self.name(), self.category(), "judge unreachable")
                .with_action(Action::Retry)
                .with_details(&e.to_string()),
        }
    }
}

/// External check: the judge's page layout still matches what the scrapers
/// were written against. Drift is a critical finding for the sync pipeline
/// but never blocks local work.
pub struct StructureCheck {
    verifier: Arc<dyn StructureVerifier>,
}

impl StructureCheck {
    pub fn new(verifier: Arc<dyn StructureVerifier>) -> Self {
        Self { verifier }
    }
}

impl Check for StructureCheck {
    fn name(&self) -> &str {
        "structure"
    }

    fn category(&self) -> Category {
        Category::External
    }

    fn capabilities(&self) -> Capabilities {
        NON_CRITICAL
    }

    fn probe(&self, ctx: &CheckContext) -> CheckResult {
        if ctx.is_cancelled() {
            return CheckResult::cancelled(self.name(), self.category());
        }

        match self.verifier.verify_structure() {
            Ok(()) => CheckResult::healthy(
                self.name(),
                self.category(),
                &format!("page layout {} verified", self.verifier.layout_version()),
            ),
            Err(e) => CheckResult::critical(
                self.name(),
                self.category(),
                &format!(
                    "judge page structure has drifted from layout {}",
                    self.verifier.layout_version()
                ),
            )
            .with_action(Action::ManualFix)
            .with_details(&e.to_string()),
        }
    }
}

/// External check: warn before the clearance cookie lapses.
pub struct SessionExpiryCheck {
    store: Arc<dyn ConfigStore>,
}

impl SessionExpiryCheck {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }
}

impl Check for SessionExpiryCheck {
    fn name(&self) -> &str {
        "session-expiry"
    }

    fn category(&self) -> Category {
        Category::External
    }

    fn capabilities(&self) -> Capabilities {
        NON_CRITICAL
    }

    fn probe(&self, ctx: &CheckContext) -> CheckResult {
        if ctx.is_cancelled() {
            return CheckResult::cancelled(self.name(), self.category());
        }

        let creds = match self.store.load_credentials() {
            Ok(creds) => creds,
            Err(e) => {
                return CheckResult::degraded(
                    self.name(),
                    self.category(),
                    "credentials unreadable",
                )
                .with_action(Action::UserPrompt)
                .with_details(&e.to_string());
            }
        };

        if !creds.is_valid() {
            return CheckResult::degraded(
                self.name(),
                self.category(),
                "no usable session, authenticated sync is off",
            )
            .with_recoverable()
            .with_action(Action::UserPrompt);
        }

        let remaining = creds.expires_in();
        if remaining <= Duration::hours(EXPIRY_WARNING_HOURS) {
            CheckResult::degraded(
                self.name(),
                self.category(),
                &format!("session expires in {} hours", remaining.num_hours()),
            )
            .with_recoverable()
            .with_action(Action::UserPrompt)
        } else {
            CheckResult::healthy(self.name(), self.category(), "session not expiring soon")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigStore, Credentials, FileConfigStore};
    use crate::doctor::report::Status;
    use crate::error::{DojoError, Result};
    use chrono::Utc;
    use tempfile::TempDir;

    struct StubClient {
        reachable: bool,
    }

    impl RemoteClient for StubClient {
        fn ping(&self, _cancel: &crate::cancel::CancelToken) -> Result<()> {
            if self.reachable {
                Ok(())
            } else {
                Err(DojoError::RemoteError {
                    message: "connection refused".into(),
                })
            }
        }

        fn get_user_info(
            &self,
            _cancel: &crate::cancel::CancelToken,
            _handles: &[String],
        ) -> Result<Vec<crate::remote::UserInfo>> {
            Ok(Vec::new())
        }
    }

    struct StubVerifier {
        drifted: bool,
    }

    impl StructureVerifier for StubVerifier {
        fn verify_structure(&self) -> Result<()> {
            if self.drifted {
                Err(DojoError::StructureMismatch {
                    layout: "2026-01".into(),
                    message: "marker missing".into(),
                })
            } else {
                Ok(())
            }
        }

        fn layout_version(&self) -> &str {
            "2026-01"
        }
    }

    #[test]
    fn all_remote_checks_are_non_critical() {
        let temp = TempDir::new().unwrap();
        let store = Arc::new(FileConfigStore::new(temp.path()));
        assert!(!PingCheck::new(Arc::new(StubClient { reachable: true }))
            .capabilities()
            .critical);
        assert!(!StructureCheck::new(Arc::new(StubVerifier { drifted: false }))
            .capabilities()
            .critical);
        assert!(!SessionExpiryCheck::new(store).capabilities().critical);
    }

    #[test]
    fn reachable_judge_is_healthy() {
        let check = PingCheck::new(Arc::new(StubClient { reachable: true }));
        let result = check.probe(&CheckContext::default());
        assert_eq!(result.status, Status::Healthy);
    }

    #[test]
    fn unreachable_judge_degrades_with_retry() {
        let check = PingCheck::new(Arc::new(StubClient { reachable: false }));
        let result = check.probe(&CheckContext::default());
        assert_eq!(result.status, Status::Degraded);
        assert_eq!(result.action, Action::Retry);
        assert!(result.details.unwrap().contains("connection refused"));
    }

    #[test]
    fn verified_structure_is_healthy() {
        let check = StructureCheck::new(Arc::new(StubVerifier { drifted: false }));
        let result = check.probe(&CheckContext::default());
        assert_eq!(result.status, Status::Healthy);
        assert!(result.message.contains("2026-01"));
    }

    #[test]
    fn drifted_structure_is_critical_manual_fix() {
        let check = StructureCheck::new(Arc::new(StubVerifier { drifted: true }));
        let result = check.probe(&CheckContext::default());
        // Critical status; the non-critical capability keeps it from
        // blocking at the orchestrator level.
        assert_eq!(result.status, Status::Critical);
        assert_eq!(result.action, Action::ManualFix);
    }

    fn expiry_check_with(temp: &TempDir, creds: Credentials) -> SessionExpiryCheck {
        let store = Arc::new(FileConfigStore::new(temp.path()));
        store
            .init(&Config {
                handle: creds.handle,
                clearance: creds.clearance,
                clearance_expires_at: creds.expires_at,
                ..Default::default()
            })
            .unwrap();
        SessionExpiryCheck::new(store)
    }

    #[test]
    fn distant_expiry_is_healthy() {
        let temp = TempDir::new().unwrap();
        let check = expiry_check_with(
            &temp,
            Credentials {
                handle: Some("tourist".into()),
                clearance: Some("tok".into()),
                expires_at: Some(Utc::now() + Duration::days(30)),
            },
        );
        let result = check.probe(&CheckContext::default());
        assert_eq!(result.status, Status::Healthy);
    }

    #[test]
    fn imminent_expiry_degrades_with_prompt() {
        let temp = TempDir::new().unwrap();
        let check = expiry_check_with(
            &temp,
            Credentials {
                handle: Some("tourist".into()),
                clearance: Some("tok".into()),
                expires_at: Some(Utc::now() + Duration::hours(12)),
            },
        );
        let result = check.probe(&CheckContext::default());
        assert_eq!(result.status, Status::Degraded);
        assert_eq!(result.action, Action::UserPrompt);
        assert!(result.message.contains("expires in"));
    }

    #[test]
    fn missing_session_degrades() {
        let temp = TempDir::new().unwrap();
        let check = expiry_check_with(&temp, Credentials::default());
        let result = check.probe(&CheckContext::default());
        assert_eq!(result.status, Status::Degraded);
    }
}
