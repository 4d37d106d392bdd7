//! Judge session state.

use crate::config::Credentials;
use crate::error::{DojoError, Result};

/// An authentication view over stored credentials, as the remote client
/// sees it. Holds no connection; authenticating requests attach the
/// clearance cookie themselves.
#[derive(Debug, Clone)]
pub struct Session {
    identity: String,
    authenticated: bool,
}

impl Session {
    /// Build a session view from stored credentials.
    pub fn from_credentials(creds: &Credentials) -> Self {
        Self {
            identity: creds.handle.clone().unwrap_or_default(),
            authenticated: creds.has_handle() && creds.is_valid(),
        }
    }

    /// An unauthenticated session for anonymous access.
    pub fn anonymous() -> Self {
        Self {
            identity: String::new(),
            authenticated: false,
        }
    }

    /// Whether the session can make authenticated requests.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// The handle this session acts as. Empty when anonymous.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Fail unless the session is authenticated.
    pub fn validate(&self) -> Result<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(DojoError::CredentialError {
                message: "session is not authenticated".to_string(),
            })
        }
    }
}
