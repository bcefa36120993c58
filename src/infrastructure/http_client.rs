//! HTTP transport for listing and detail fetches.
//!
//! The pipeline talks to the network only through [`PageFetcher`], so tests
//! substitute deterministic mock transports for the real client.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;

use crate::infrastructure::config::CrawlerConfig;

/// Blocking-from-the-caller's-view page fetch capability.
///
/// Both methods return the decoded body text on success and an error on any
/// transport failure or non-success status. How the error is handled differs
/// by call site: listing failures abort the partition, detail failures
/// collapse to an empty tag string.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a listing page. No timeout unless one is configured.
    async fn fetch_listing(&self, url: &str) -> Result<String>;

    /// Fetch a subject (detail) page with the configured per-request timeout.
    async fn fetch_detail(&self, url: &str) -> Result<String>;
}

/// Production transport: one shared reqwest client with the research
/// User-Agent, gzip/brotli decoding and charset-aware body text.
pub struct HttpClient {
    client: Client,
    detail_timeout: Duration,
    listing_timeout: Option<Duration>,
}

impl HttpClient {
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).context("Invalid user agent")?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            detail_timeout: Duration::from_secs(config.detail_timeout_secs),
            listing_timeout: config.listing_timeout_secs.map(Duration::from_secs),
        })
    }

    async fn get_text(&self, url: &str, timeout: Option<Duration>) -> Result<String> {
        let mut request = self.client.get(url);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to fetch URL: {url}"))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP request failed with status {}: {}", response.status(), url);
        }

        // reqwest decodes per the declared charset, falling back to UTF-8.
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from: {url}"))?;

        tracing::debug!("Fetched {} ({} chars)", url, text.len());
        Ok(text)
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch_listing(&self, url: &str) -> Result<String> {
        self.get_text(url, self.listing_timeout).await
    }

    async fn fetch_detail(&self, url: &str) -> Result<String> {
        self.get_text(url, Some(self.detail_timeout)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_with_defaults() {
        let client = HttpClient::new(&CrawlerConfig::default());
        assert!(client.is_ok());
        let client = client.unwrap();
        assert_eq!(client.detail_timeout, Duration::from_secs(10));
        assert!(client.listing_timeout.is_none());
    }

    #[test]
    fn listing_timeout_honors_config() {
        let config = CrawlerConfig {
            listing_timeout_secs: Some(30),
            ..CrawlerConfig::default()
        };
        let client = HttpClient::new(&config).unwrap();
        assert_eq!(client.listing_timeout, Some(Duration::from_secs(30)));
    }
}
