//! HTTP client for the athlete feed.

use crate::config::SourceConfig;
use crate::error::{Error, Result};
use crate::state::Payload;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

/// Anything that can produce one payload per poll cycle.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PayloadSource: Send + Sync {
    /// Fetch and validate the current payload.
    async fn fetch(&self) -> Result<Payload>;
}

/// Fetches the payload from the configured endpoint.
pub struct HttpSource {
    endpoint: Url,
    http: reqwest::Client,
}

impl HttpSource {
    /// Create a source with a client built from the config.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::config(format!("Could not build HTTP client: {}", e)))?;
        Self::with_client(config, http)
    }

    /// Create a source using the provided [`reqwest::Client`].
    pub fn with_client(config: &SourceConfig, http: reqwest::Client) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| Error::config(format!("Invalid endpoint {}: {}", config.endpoint, e)))?;
        Ok(Self { endpoint, http })
    }

    /// The endpoint with a cache-busting `t` parameter appended.
    pub fn request_url(&self, now_ms: i64) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("t", &now_ms.to_string());
        url
    }
}

#[async_trait]
impl PayloadSource for HttpSource {
    async fn fetch(&self) -> Result<Payload> {
        let url = self.request_url(chrono::Utc::now().timestamp_millis());
        tracing::debug!(%url, "Fetching payload");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::transport(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::transport(format!(
                "unexpected status {} from {}",
                status, url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(format!("failed to read body from {}: {}", url, e)))?;

        super::DataConverter::parse_payload(&body)
    }
}
