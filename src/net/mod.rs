//! Network utilities: the HTTP client, rate limiting, and the fetch
//! boundary the extraction pathways sit behind.
//!
//! Extraction never talks to the network directly. The client issues one
//! [`Fetch`] call per pathway invocation, suspends until the response
//! arrives, and then runs parsing synchronously. Tests substitute the
//! fetch boundary with canned documents.
//!
//! # Examples
//!
//! ```rust
//! use bestiary::net::HttpClient;
//!
//! # async fn example() -> bestiary::Result<()> {
//! let client = HttpClient::new("dndbeyond")
//!     .with_rate_limit(500)  // 500ms between requests
//!     .with_max_retries(3);
//!
//! let html = client.get_text("https://www.dndbeyond.com/monsters").await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use reqwest::Client;
use std::collections::HashMap;
use std::time::{Duration, Instant};

pub mod html;

/// Global HTTP client instance with connection pooling, compression and a
/// bounded timeout. Created lazily on first use and shared by every
/// [`HttpClient`].
static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("bestiary/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(10)
        .gzip(true)
        .brotli(true)
        .build()
        .expect("Failed to build HTTP client")
});

/// The asynchronous fetch boundary.
///
/// One implementation wraps [`HttpClient`]; test suites provide stubs that
/// serve synthetic documents. A failed fetch propagates to the calling
/// pathway unchanged.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetches a page as markup text.
    async fn fetch_text(&self, url: &str) -> crate::Result<String>;

    /// Fetches a page as a JSON document.
    async fn fetch_json(&self, url: &str) -> crate::Result<serde_json::Value>;
}

/// Per-site rate limiter enforcing a minimum delay between requests.
///
/// Tracks the last request time per key behind a `Mutex`; safe to use
/// across tasks.
#[derive(Debug)]
pub struct RateLimiter {
    last_request: Mutex<HashMap<String, Instant>>,
    default_delay: Duration,
}

impl Clone for RateLimiter {
    fn clone(&self) -> Self {
        Self {
            last_request: Mutex::new(HashMap::new()),
            default_delay: self.default_delay,
        }
    }
}

impl RateLimiter {
    /// Creates a new rate limiter with the specified minimum delay between
    /// requests, in milliseconds.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            last_request: Mutex::new(HashMap::new()),
            default_delay: Duration::from_millis(delay_ms),
        }
    }

    /// Waits if necessary before allowing a request for the specified key.
    pub async fn wait(&self, key: &str) {
        let now = Instant::now();
        let wait_duration = {
            let last_map = self.last_request.lock();
            if let Some(&last) = last_map.get(key) {
                let elapsed = now.duration_since(last);
                if elapsed < self.default_delay {
                    Some(self.default_delay - elapsed)
                } else {
                    None
                }
            } else {
                None
            }
        };

        if let Some(duration) = wait_duration {
            tokio::time::sleep(duration).await;
        }

        self.last_request
            .lock()
            .insert(key.to_string(), Instant::now());
    }
}

/// HTTP client wrapper with built-in rate limiting and retry logic.
///
/// Each client is labeled with the site it talks to; the label keys the
/// rate limiter and appears in error context.
#[derive(Clone, Debug)]
pub struct HttpClient {
    site: String,
    rate_limiter: RateLimiter,
    max_retries: u32,
}

impl HttpClient {
    /// Creates a new HTTP client labeled with the site it talks to.
    ///
    /// Defaults: 200ms between requests, 3 retries.
    pub fn new(site: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            rate_limiter: RateLimiter::new(200),
            max_retries: 3,
        }
    }

    /// Sets the minimum delay between requests, in milliseconds.
    pub fn with_rate_limit(mut self, delay_ms: u64) -> Self {
        self.rate_limiter = RateLimiter::new(delay_ms);
        self
    }

    /// Sets the maximum number of retries for failed requests.
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Performs a GET request with rate limiting and bounded retry.
    ///
    /// 429 responses are retried with exponential backoff; once retries are
    /// exhausted the `Retry-After` header is surfaced in the error. Other
    /// HTTP error statuses fail immediately.
    pub async fn get(&self, url: &str) -> crate::Result<Bytes> {
        let mut attempts = 0;

        loop {
            self.rate_limiter.wait(&self.site).await;

            match CLIENT.get(url).send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        return Ok(response.bytes().await?);
                    }

                    if response.status() == 429 {
                        if attempts < self.max_retries {
                            attempts += 1;
                            let delay = Duration::from_secs(2_u64.pow(attempts));
                            log::warn!("{}: rate limited, backing off {:?}", self.site, delay);
                            tokio::time::sleep(delay).await;
                            continue;
                        }

                        let retry_after = response
                            .headers()
                            .get("retry-after")
                            .and_then(|v| v.to_str().ok())
                            .and_then(|v| v.parse::<u64>().ok());

                        return Err(crate::Error::rate_limit(retry_after));
                    }

                    return Err(crate::Error::parse(format!(
                        "{}: HTTP {} for {}",
                        self.site,
                        response.status(),
                        url
                    )));
                }
                Err(e) => {
                    if attempts < self.max_retries {
                        attempts += 1;
                        log::debug!("{}: request failed ({}), retrying", self.site, e);
                        tokio::time::sleep(Duration::from_secs(1)).await;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }

    /// Performs a GET request and returns the response as a UTF-8 string.
    pub async fn get_text(&self, url: &str) -> crate::Result<String> {
        let bytes = self.get(url).await?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| crate::Error::parse(format!("Invalid UTF-8: {}", e)))
    }

    /// Performs a GET request and deserializes the response as JSON.
    pub async fn get_json<T>(&self, url: &str) -> crate::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let bytes = self.get(url).await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}

#[async_trait]
impl Fetch for HttpClient {
    async fn fetch_text(&self, url: &str) -> crate::Result<String> {
        self.get_text(url).await
    }

    async fn fetch_json(&self, url: &str) -> crate::Result<serde_json::Value> {
        self.get_json(url).await
    }
}
