//! Credential and session check.

use std::sync::Arc;

use crate::config::ConfigStore;
use crate::doctor::check::{Capabilities, Check, CheckContext};
use crate::doctor::report::{Action, Category, CheckResult};
use crate::remote::Session;

/// Internal check over stored credentials. Never blocks proceeding: anonymous
/// use of the tool is fully supported, authenticated features just stay off.
pub struct CredentialsCheck {
    store: Arc<dyn ConfigStore>,
}

impl CredentialsCheck {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }
}

impl Check for CredentialsCheck {
    fn name(&self) -> &str {
        "credentials"
    }

    fn category(&self) -> Category {
        Category::Internal
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            auto_fix: false,
            critical: false,
        }
    }

    fn probe(&self, ctx: &CheckContext) -> CheckResult {
        if ctx.is_cancelled() {
            return CheckResult::cancelled(self.name(), self.category());
        }

        if !self.store.has_handle() {
            return CheckResult::degraded(
                self.name(),
                self.category(),
                "no judge handle configured",
            )
            .with_recoverable()
            .with_action(Action::UserPrompt)
            .with_details("run `dojo init --handle <handle>`");
        }

        if !self.store.has_cookie() {
            return CheckResult::degraded(
                self.name(),
                self.category(),
                "no clearance cookie stored",
            )
            .with_recoverable()
            .with_action(Action::UserPrompt)
            .with_details("log in on the judge and store the clearance cookie in the config");
        }

        match self.store.load_credentials() {
            Ok(creds) => {
                let session = Session::from_credentials(&creds);
                if session.is_authenticated() {
                    CheckResult::healthy(
                        self.name(),
                        self.category(),
                        &format!("session valid for {}", session.identity()),
                    )
                } else {
                    CheckResult::degraded(
                        self.name(),
                        self.category(),
                        &format!("session for {} has expired", session.identity()),
                    )
                    .with_recoverable()
                    .with_action(Action::UserPrompt)
                }
            }
            Err(e) => CheckResult::degraded(
                self.name(),
                self.category(),
                "credentials unreadable",
            )
            .with_action(Action::UserPrompt)
            .with_details(&e.to_string()),
        }
    }
}
