use std::time::Duration;

use crate::core::config::ClientConfig;
use crate::core::error::{Result, WilayahError};
use crate::features::regions::models::Envelope;

/// Single-shot GET transport for the wilayah.id JSON endpoints
#[derive(Debug, Clone)]
pub struct Transport {
    http_client: reqwest::Client,
    base_url: String,
}

impl Transport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| WilayahError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch `path` relative to the base URL and decode the envelope.
    ///
    /// Exactly one request is made. Non-2xx answers are request errors,
    /// bodies that do not decode are parse errors. Without a timeout the
    /// request waits as long as the server keeps the connection open.
    pub async fn fetch(&self, path: &str, timeout: Option<Duration>) -> Result<Envelope> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!("Fetching regions: {}", url);

        let mut request = self.http_client.get(&url);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| {
                tracing::error!("wilayah.id request failed: {}", e);
                WilayahError::Request {
                    url: url.clone(),
                    source: e,
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("wilayah.id API error: HTTP {} - {}", status, url);
            return Err(WilayahError::Status {
                url,
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read wilayah.id response body: {}", e);
            WilayahError::Request {
                url: url.clone(),
                source: e,
            }
        })?;

        let envelope: Envelope = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse wilayah.id response: {}", e);
            WilayahError::Parse {
                url: url.clone(),
                source: e,
            }
        })?;

        tracing::debug!("Fetched {} regions from {}", envelope.len(), url);

        Ok(envelope)
    }
}

/// Build `{prefix}/{code}.json`, encoding the code as a single path segment
pub(crate) fn child_listing_path(prefix: &str, parent_code: &str) -> String {
    format!("{}/{}.json", prefix, urlencoding::encode(parent_code))
}
