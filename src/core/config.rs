use std::env;
use std::time::Duration;

use crate::core::error::{Result, WilayahError};
use crate::shared::constants::{
    DEFAULT_BASE_URL, DEFAULT_GLOBAL_SEARCH_CONCURRENCY, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Client configuration for the wilayah.id API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL, without a trailing slash
    pub base_url: String,
    /// Per-request timeout in seconds; 0 waits indefinitely
    pub timeout_secs: u64,
    /// Value of the `User-Agent` header sent on every request
    pub user_agent: String,
    /// How many province listings the global regency search keeps in flight
    pub global_search_concurrency: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            global_search_concurrency: DEFAULT_GLOBAL_SEARCH_CONCURRENCY,
        }
    }
}

impl ClientConfig {
    /// Load configuration from the process environment.
    ///
    /// Variables:
    /// - `WILAYAH_BASE_URL` (default: `https://wilayah.id/api`)
    /// - `WILAYAH_TIMEOUT_SECS` (default: 30)
    /// - `WILAYAH_USER_AGENT` (default: `wilayah-client/<version>`)
    /// - `WILAYAH_SEARCH_CONCURRENCY` (default: 4)
    pub fn from_env() -> Result<Self> {
        // Load .env file if exists, ignore if not found
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Error loading .env file: {}", e);
            }
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("WILAYAH_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = lookup("WILAYAH_TIMEOUT_SECS")
            .unwrap_or_else(|| DEFAULT_TIMEOUT_SECS.to_string())
            .trim()
            .parse::<u64>()
            .map_err(|_| {
                WilayahError::Config("WILAYAH_TIMEOUT_SECS must be a valid number".to_string())
            })?;

        let user_agent = lookup("WILAYAH_USER_AGENT")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let global_search_concurrency = lookup("WILAYAH_SEARCH_CONCURRENCY")
            .unwrap_or_else(|| DEFAULT_GLOBAL_SEARCH_CONCURRENCY.to_string())
            .trim()
            .parse::<usize>()
            .map_err(|_| {
                WilayahError::Config(
                    "WILAYAH_SEARCH_CONCURRENCY must be a valid number".to_string(),
                )
            })?;

        Ok(Self {
            base_url,
            timeout_secs,
            user_agent,
            global_search_concurrency,
        }
        .normalized())
    }

    /// Trim the base URL and clamp the fan-out to at least one request
    pub(crate) fn normalized(mut self) -> Self {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        self.global_search_concurrency = self.global_search_concurrency.max(1);
        self
    }

    /// Per-request timeout, `None` when `timeout_secs` is 0
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
