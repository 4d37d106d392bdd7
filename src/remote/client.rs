//! HTTP client for the judge platform's JSON API.

use serde::Deserialize;
use std::time::Duration;

use crate::cancel::CancelToken;
use crate::error::{DojoError, Result};

/// Request timeout for judge API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Public profile information for one handle.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub handle: String,
    #[serde(default)]
    pub rating: Option<i64>,
}

/// Judge API surface the diagnostic checks consume.
pub trait RemoteClient {
    /// Cheap liveness probe against the judge.
    fn ping(&self, cancel: &CancelToken) -> Result<()>;

    /// Fetch public profile information for the given handles.
    fn get_user_info(&self, cancel: &CancelToken, handles: &[String]) -> Result<Vec<UserInfo>>;
}

/// Envelope the judge API wraps every response in.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    status: String,
    #[serde(default)]
    comment: Option<String>,
    result: Option<T>,
}

/// Blocking reqwest implementation of [`RemoteClient`].
#[derive(Debug, Clone)]
pub struct HttpRemoteClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpRemoteClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("dojo/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DojoError::RemoteError {
                message: e.to_string(),
            })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn check_cancelled(cancel: &CancelToken) -> Result<()> {
        if cancel.is_cancelled() {
            return Err(DojoError::RemoteError {
                message: "request cancelled".to_string(),
            });
        }
        Ok(())
    }
}

impl RemoteClient for HttpRemoteClient {
    fn ping(&self, cancel: &CancelToken) -> Result<()> {
        Self::check_cancelled(cancel)?;
        let url = format!("{}/api/ping", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| DojoError::RemoteError {
                message: format!("ping failed: {e}"),
            })?;
        if !response.status().is_success() {
            return Err(DojoError::RemoteError {
                message: format!("ping returned HTTP {}", response.status()),
            });
        }
        Ok(())
    }

    fn get_user_info(&self, cancel: &CancelToken, handles: &[String]) -> Result<Vec<UserInfo>> {
        Self::check_cancelled(cancel)?;
        let url = format!("{}/api/user.info", self.base_url);
        let response: ApiResponse<Vec<UserInfo>> = self
            .client
            .get(&url)
            .query(&[("handles", handles.join(";"))])
            .send()
            .map_err(|e| DojoError::RemoteError {
                message: format!("user.info failed: {e}"),
            })?
            .json()
            .map_err(|e| DojoError::RemoteError {
                message: format!("user.info returned malformed JSON: {e}"),
            })?;

        if response.status != "OK" {
            return Err(DojoError::RemoteError {
                message: response
                    .comment
                    .unwrap_or_else(|| format!("judge returned status {}", response.status)),
            });
        }

        response.result.ok_or_else(|| DojoError::RemoteError {
            message: "judge returned OK with no result".to_string(),
        })
    }
}
