//! Remote page-structure verification.
//!
//! Parts of the sync pipeline scrape judge pages rather than call the JSON
//! API. Scraping silently breaks when the judge ships a page redesign, so
//! the verifier fetches a known page and asserts the markers the scrapers
//! anchor on are still present.

use std::time::Duration;

use crate::error::{DojoError, Result};

/// Identifier of the page layout the current scrapers were written against.
/// Bumped whenever the scraper selectors are updated for a judge redesign.
pub const LAYOUT_VERSION: &str = "2026-01";

/// Markers the problemset page must contain for the scrapers to work.
const REQUIRED_MARKERS: &[&str] = &["class=\"problemset\"", "class=\"contest-table\""];

/// Request timeout for the verification fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Structure verification surface the diagnostic checks consume.
pub trait StructureVerifier {
    /// Fetch the anchor page and fail if any expected marker is missing.
    fn verify_structure(&self) -> Result<()>;

    /// Layout identifier for diagnostic messages.
    fn layout_version(&self) -> &str;
}

/// Verifier that fetches the judge's problemset page over HTTP.
#[derive(Debug, Clone)]
pub struct PageStructureVerifier {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl PageStructureVerifier {
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
}

impl StructureVerifier for PageStructureVerifier {
    fn verify_structure(&self) -> Result<()> {
        let url = format!("{}/problemset", self.base_url);
        let body = self
            .client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| DojoError::RemoteError {
                message: format!("failed to fetch {url}: {e}"),
            })?;

        for marker in REQUIRED_MARKERS {
            if !body.contains(marker) {
                return Err(DojoError::StructureMismatch {
                    layout: LAYOUT_VERSION.to_string(),
                    message: format!("marker {marker} not found on problemset page"),
                });
            }
        }
        Ok(())
    }

    fn layout_version(&self) -> &str {
        LAYOUT_VERSION
    }
}
