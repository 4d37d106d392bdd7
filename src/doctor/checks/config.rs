//! Configuration presence check.

use std::sync::Arc;

use crate::config::{Config, ConfigStore};
use crate::doctor::check::{Capabilities, Check, CheckContext};
use crate::doctor::report::{Action, Category, CheckResult};
use crate::error::Result;

/// Internal check: a configuration file must load. Absence is critical but
/// auto-fixable by re-initializing defaults.
pub struct ConfigCheck {
    store: Arc<dyn ConfigStore>,
}

impl ConfigCheck {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }
}

impl Check for ConfigCheck {
    fn name(&self) -> &str {
        "config"
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

        match self.store.get() {
            Some(config) => CheckResult::healthy(
                self.name(),
                self.category(),
                "configuration loaded",
            )
            .with_details(&format!("judge: {}", config.judge_url)),
            None => CheckResult::critical(
                self.name(),
                self.category(),
                "no configuration loaded",
            )
            .with_recoverable()
            .with_action(Action::AutoFix)
            .with_details("a default configuration can be written; set your handle with `dojo init`"),
        }
    }

    fn auto_fix(&self, _ctx: &CheckContext) -> Result<()> {
        self.store.init(&Config::default())
    }
}
