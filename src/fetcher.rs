//! Plain-GET transport seam.
//!
//! The services only ever need `GET url -> body | error`, so that is the
//! whole trait. Production uses [`HttpFetcher`]; tests substitute stubs
//! to count calls or inject failures without a network.

use std::time::Duration;

use async_trait::async_trait;

use crate::errors::TransportError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Performs a plain GET and returns the response body.
///
/// No retries, no auth headers. Timeouts and connection failures surface
/// as [`TransportError`]; the caller decides what failure class that is.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, TransportError>;
}

/// Fetcher backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<String, TransportError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::new(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::new(url, format!("HTTP {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| TransportError::new(url, e.to_string()))
    }
}
