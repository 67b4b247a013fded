//! HTTP client for fetching source pages
//!
//! A thin `reqwest` wrapper carrying the identifying request header and
//! a fixed per-request timeout. A slow or hanging source is bounded only
//! by that timeout; failed requests are not retried.

use std::time::Duration;

use crate::error::{Result, ScrapeError};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 15)
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// HTTP client wrapper for source page fetches
pub struct PageClient {
    client: reqwest::Client,
}

impl PageClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent)
            .build()
            .map_err(ScrapeError::Http)?;

        Ok(Self { client })
    }

    /// Fetch a page and return its body as text
    ///
    /// # Arguments
    /// * `url` - Full URL of the page to fetch
    ///
    /// # Errors
    /// - `Http` - Network error or timeout
    /// - `Status` - Server answered with a non-2xx status
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ScrapeError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(ScrapeError::Http)
    }
}
