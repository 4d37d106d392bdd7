//! Credential view over the stored configuration.
//!
//! The judge authenticates with a handle plus a clearance cookie issued by
//! its login flow. Dojo never refreshes the cookie itself; it only reports
//! whether the stored one is still usable.

use chrono::{DateTime, Duration, Utc};

/// Credentials loaded from the config store.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Judge handle, if configured.
    pub handle: Option<String>,

    /// Clearance cookie issued by the judge's login flow.
    pub clearance: Option<String>,

    /// When the clearance cookie expires, if known.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Credentials {
    /// Whether a handle is configured.
    pub fn has_handle(&self) -> bool {
        self.handle.as_deref().is_some_and(|h| !h.is_empty())
    }

    /// Whether the credentials can authenticate a request right now:
    /// a clearance cookie is present and not past its expiry.
    pub fn is_valid(&self) -> bool {
        let has_clearance = self.clearance.as_deref().is_some_and(|c| !c.is_empty());
        has_clearance && self.expires_in() > Duration::zero()
    }

    /// Time remaining before the clearance cookie expires.
    ///
    /// A cookie with no recorded expiry is treated as non-expiring. An
    /// already-expired cookie yields zero.
    pub fn expires_in(&self) -> Duration {
        match self.expires_at {
            Some(at) => (at - Utc::now()).max(Duration::zero()),
            None => Duration::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_credentials_have_no_handle() {
        let creds = Credentials::default();
        assert!(!creds.has_handle());
        assert!(!creds.is_valid());
    }

    #[test]
    fn blank_handle_does_not_count() {
        let creds = Credentials {
            handle: Some(String::new()),
            ..Default::default()
        };
        assert!(!creds.has_handle());
    }

    #[test]
    fn clearance_without_expiry_is_valid() {
        let creds = Credentials {
            handle: Some("tourist".into()),
            clearance: Some("abc123".into()),
            expires_at: None,
        };
        assert!(creds.is_valid());
        assert!(creds.expires_in() > Duration::days(365));
    }

    #[test]
    fn future_expiry_is_valid() {
        let creds = Credentials {
            handle: Some("tourist".into()),
            clearance: Some("abc123".into()),
            expires_at: Some(Utc::now() + Duration::hours(12)),
        };
        assert!(creds.is_valid());
        let remaining = creds.expires_in();
        assert!(remaining > Duration::hours(11));
        assert!(remaining <= Duration::hours(12));
    }

    #[test]
    fn past_expiry_is_invalid_and_zero_remaining() {
        let creds = Credentials {
            handle: Some("tourist".into()),
            clearance: Some("abc123".into()),
            expires_at: Some(Utc::now() - Duration::hours(1)),
        };
        assert!(!creds.is_valid());
        assert_eq!(creds.expires_in(), Duration::zero());
    }

    #[test]
    fn missing_clearance_is_invalid_even_with_future_expiry() {
        let creds = Credentials {
            handle: Some("tourist".into()),
            clearance: None,
            expires_at: Some(Utc::now() + Duration::hours(12)),
        };
        assert!(!creds.is_valid());
    }
}
