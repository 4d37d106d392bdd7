//! Workspace schema versioning.
//!
//! Every persisted entity carries a `version: "<major>.<minor>.<patch>"`
//! header. Compatibility is decided on the major component alone: a major
//! mismatch is a hard break, while a same-major difference in minor or patch
//! means the entity is readable but due for migration.

use std::fmt;
use std::str::FromStr;

use crate::error::{DojoError, Result};

/// A `major.minor.patch` version triple parsed from a persisted header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SchemaVersion {
    /// Schema version written by this build of the tool.
    pub const CURRENT: SchemaVersion = SchemaVersion::new(1, 1, 0);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Whether an entity written at `self` can be read by a tool at
    /// `current`. Major versions must match exactly.
    pub fn is_compatible(&self, current: &SchemaVersion) -> bool {
        self.major == current.major
    }

    /// Whether an entity written at `self` is readable by `current` but
    /// differs in minor or patch, i.e. a migration would bring it up to date.
    pub fn needs_migration(&self, current: &SchemaVersion) -> bool {
        self.is_compatible(current) && self != current
    }
}

impl FromStr for SchemaVersion {
    type Err = DojoError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DojoError::InvalidVersion {
            value: s.to_string(),
        };

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let mut nums = [0u32; 3];
        for (slot, part) in nums.iter_mut().zip(&parts) {
            *slot = part.parse::<u32>().map_err(|_| invalid())?;
        }

        Ok(Self::new(nums[0], nums[1], nums[2]))
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
