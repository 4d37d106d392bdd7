//! Diagnostic check orchestration and reporting.
//!
//! The doctor decides whether the tool's local and remote dependencies are
//! in a usable state, fixes what it safely can, and gates whether
//! higher-level functionality may proceed.

pub mod check;
pub mod checker;
pub mod checks;
pub mod report;

pub use check::{Capabilities, Check, CheckContext};
pub use checker::Checker;
pub use report::{Action, Category, CheckResult, Report, Status};
