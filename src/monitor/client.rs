//! HTTP page fetcher built on wreq.

use crate::error::CheckError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use wreq::Client;

/// Fixed identity header sent with every page request.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; DealAgent/1.0)";

/// Trait for page retrieval - enables mocking for tests.
#[async_trait]
pub trait FetchPage: Send + Sync {
    /// Fetches the raw markup for a URL.
    async fn fetch(&self, url: &str) -> Result<String, CheckError>;
}

/// Production fetcher: a single GET per target, fixed User-Agent,
/// 30-second timeout, no retries.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a fetcher with the standard timeouts.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl FetchPage for PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, CheckError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .send()
            .await
            .map_err(|source| CheckError::Fetch { url: url.to_string(), source })?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(CheckError::Status { url: url.to_string(), status: status.as_u16() });
        }

        response
            .text()
            .await
            .map_err(|source| CheckError::Fetch { url: url.to_string(), source })
    }
}
