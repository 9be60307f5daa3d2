//! HTTP client for the hero statistics page
//!
//! This module provides the fetch side of the pipeline: a single GET with
//! pinned headers and a fixed timeout. One attempt per request, fail fast;
//! the only timing control is an optional fixed delay between consecutive
//! requests, used purely to avoid hammering the remote server.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::error::{RatesError, Result};

/// Base URL of the statistics page
const RATES_BASE_URL: &str = "https://overwatch.blizzard.com/en-us/rates/";

/// Pinned User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Accept-Language header sent with every request
const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Query parameters of the statistics page URL.
///
/// These are opaque pass-through values; the page defines their meaning
/// and the scraper never validates them. Defaults match the live page.
#[derive(Debug, Clone)]
pub struct PageQuery {
    /// Input platform filter (`input=`)
    pub input: String,
    /// Map filter (`map=`)
    pub map: String,
    /// Region filter (`region=`)
    pub region: String,
    /// Role filter (`role=`)
    pub role: String,
    /// Queue type (`rq=`)
    pub rq: String,
    /// Skill tier filter (`tier=`)
    pub tier: String,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            input: "PC".to_string(),
            map: "all-maps".to_string(),
            region: "Europe".to_string(),
            role: "All".to_string(),
            rq: "2".to_string(),
            tier: "All".to_string(),
        }
    }
}

impl PageQuery {
    /// Render the absolute URL for this query
    pub fn url(&self) -> String {
        format!(
            "{}?input={}&map={}&region={}&role={}&rq={}&tier={}",
            RATES_BASE_URL,
            urlencoding::encode(&self.input),
            urlencoding::encode(&self.map),
            urlencoding::encode(&self.region),
            urlencoding::encode(&self.role),
            urlencoding::encode(&self.rq),
            urlencoding::encode(&self.tier),
        )
    }
}

/// Paces consecutive requests a fixed interval apart.
///
/// Only matters when more than one fetch is issued in a process lifetime
/// (e.g. one per role filter); a single-fetch run never waits.
pub struct RequestPacer {
    /// Minimum interval between requests
    min_interval: Duration,
    /// Timestamp of the last request
    last_request: Arc<Mutex<Instant>>,
}

impl RequestPacer {
    /// Create a pacer enforcing `min_interval` between requests
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Arc::new(Mutex::new(Instant::now() - min_interval)),
        }
    }

    /// Wait until the minimum interval since the previous request has
    /// elapsed, then claim the slot.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        let elapsed = last.elapsed();

        if elapsed < self.min_interval {
            sleep(self.min_interval - elapsed).await;
        }

        *last = Instant::now();
    }

    /// The enforced minimum interval
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

/// Configuration for the rates HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Fixed delay between consecutive requests in milliseconds (default: 2000)
    pub request_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            request_delay_ms: 2000,
        }
    }
}

/// HTTP client with pinned headers and a fixed timeout.
///
/// Issues exactly one attempt per request: any non-200 status or
/// transport failure is returned to the caller as a typed error,
/// never retried.
pub struct RatesClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Pacer for inter-request spacing
    pacer: RequestPacer,
}

impl RatesClient {
    /// Create a new client with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("text/html,application/xhtml+xml"),
        );

        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let pacer = RequestPacer::new(Duration::from_millis(config.request_delay_ms));

        Ok(Self { client, pacer })
    }

    /// Fetch the body of `url` as text.
    ///
    /// # Errors
    /// - `RatesError::Http` - transport failure (DNS, connect, timeout)
    /// - `RatesError::UnexpectedStatus` - any status other than 200
    pub async fn fetch(&self, url: &str) -> Result<String> {
        self.pacer.acquire().await;

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status != reqwest::StatusCode::OK {
            return Err(RatesError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
