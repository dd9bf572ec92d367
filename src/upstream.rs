use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use tokio::time::timeout;

use crate::config::Config;
use crate::error::UpstreamError;

// Endpoint paths on the upstream, appended after the configured API prefix
pub const DEVLOGS: &str = "/devlogs";
pub const DEVLOGS_SEARCH: &str = "/devlogs/search";
pub const SERVICES: &str = "/services";

// Health probe lives at the upstream root, outside the API prefix
const HEALTH_PROBE: &str = "/health";

/// HTTP client for the upstream devlog service.
///
/// Every call is bounded by the configured timeout: the request/parse sequence
/// races a timer, and whichever side is still pending when the other settles
/// is dropped. The timer is released on every exit path.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    api_prefix: String,
    timeout: Duration,
}

impl UpstreamClient {
    /// Create a new upstream client from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("Failed to create upstream HTTP client")?;

        Ok(Self {
            http,
            base_url: config.upstream_url.clone(),
            api_prefix: config.upstream_api_prefix.clone(),
            timeout: Duration::from_secs(config.upstream_timeout_secs),
        })
    }

    /// GET an API endpoint and return its JSON body.
    ///
    /// The target URL is `base + prefix + endpoint`, plus the raw query string
    /// if one is supplied. Non-2xx statuses, network failures, timeouts, and
    /// unparseable bodies are all reported as [`UpstreamError`].
    pub async fn fetch_json(
        &self,
        endpoint: &str,
        query: Option<&str>,
    ) -> Result<JsonValue, UpstreamError> {
        let mut url = format!("{}{}{}", self.base_url, self.api_prefix, endpoint);
        if let Some(query) = query {
            if !query.is_empty() {
                url.push('?');
                url.push_str(query);
            }
        }

        let request = async {
            let response = self
                .http
                .get(&url)
                .send()
                .await
                .map_err(UpstreamError::Network)?;

            let status = response.status();
            if !status.is_success() {
                return Err(UpstreamError::Status(status.as_u16()));
            }

            response.json::<JsonValue>().await.map_err(UpstreamError::Json)
        };

        match timeout(self.timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(UpstreamError::Timeout(self.timeout)),
        }
    }

    /// Probe the upstream's own health endpoint.
    ///
    /// Same timeout policy as [`fetch_json`](Self::fetch_json), but the body
    /// is ignored; only reachability and a 2xx status matter.
    pub async fn health_check(&self) -> Result<(), UpstreamError> {
        let url = format!("{}{}", self.base_url, HEALTH_PROBE);

        let request = async {
            let response = self
                .http
                .get(&url)
                .send()
                .await
                .map_err(UpstreamError::Network)?;

            let status = response.status();
            if !status.is_success() {
                return Err(UpstreamError::Status(status.as_u16()));
            }

            Ok(())
        };

        match timeout(self.timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(UpstreamError::Timeout(self.timeout)),
        }
    }
}
