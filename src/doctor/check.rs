//! The diagnostic check contract.

use crate::cancel::CancelToken;
use crate::doctor::report::{Category, CheckResult};
use crate::error::{DojoError, Result};

/// Capability descriptor resolved once at registration, replacing ad hoc
/// runtime probing for optional behavior.
#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    /// Whether [`Check::auto_fix`] is meaningful for this check.
    pub auto_fix: bool,

    /// Whether a Critical result from this check blocks proceeding. When
    /// false, a Critical result can only degrade the overall status.
    pub critical: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            auto_fix: false,
            critical: true,
        }
    }
}

/// Shared context passed to every probe and auto-fix invocation.
#[derive(Debug, Clone, Default)]
pub struct CheckContext {
    cancel: CancelToken,
}

impl CheckContext {
    pub fn new(cancel: CancelToken) -> Self {
        Self { cancel }
    }

    /// Whether the caller has requested cancellation. Probes must poll this
    /// at their blocking boundaries and return promptly with
    /// [`CheckResult::cancelled`] instead of blocking on.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// The underlying token, for handing to collaborators that block.
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }
}

/// One diagnostic unit.
///
/// A probe may perform blocking I/O but must return a [`CheckResult`] for
/// every input: faults are captured into the result's message and details,
/// never propagated out.
pub trait Check {
    /// Stable identity used in results and log lines.
    fn name(&self) -> &str;

    /// Which execution phase this check runs in.
    fn category(&self) -> Category;

    /// Optional capabilities. Resolved once when the check is registered.
    fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }

    /// Run the diagnostic and report its outcome.
    fn probe(&self, ctx: &CheckContext) -> CheckResult;

    /// Single remediation attempt for a Critical, recoverable finding.
    /// Invoked by the orchestrator only when the registered capabilities
    /// advertise it; safe to call once per detection.
    fn auto_fix(&self, _ctx: &CheckContext) -> Result<()> {
        Err(DojoError::Other(anyhow::anyhow!(
            "{} does not support auto-fix",
            self.name()
        )))
    }
}
