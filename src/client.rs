use crate::core::config::ClientConfig;
use crate::core::error::Result;
use crate::core::http::Transport;
use crate::features::regions::models::Envelope;
use crate::features::regions::resources::{
    DistrictResource, ProvinceResource, RegencyResource, VillageResource,
};
use crate::features::regions::services::RegionLookupService;

/// Entry point for the wilayah.id API.
///
/// Holds configuration only; every accessor borrows the client for the
/// duration of a call and nothing is cached between calls. Changing the
/// timeout needs `&mut self`, so a client shared across tasks must be cloned
/// (each clone carries its own settings) rather than mutated in place.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Transport,
    config: ClientConfig,
}

impl Client {
    /// Client with production defaults (wilayah.id, 30s timeout)
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let config = config.normalized();
        let transport = Transport::new(&config)?;

        tracing::debug!(
            "wilayah client ready: base_url={}, timeout={}s",
            config.base_url,
            config.timeout_secs
        );

        Ok(Self { transport, config })
    }

    /// Client configured from `WILAYAH_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    pub fn provinces(&self) -> ProvinceResource<'_> {
        ProvinceResource::new(self)
    }

    pub fn regencies(&self) -> RegencyResource<'_> {
        RegencyResource::new(self)
    }

    pub fn districts(&self) -> DistrictResource<'_> {
        DistrictResource::new(self)
    }

    pub fn villages(&self) -> VillageResource<'_> {
        VillageResource::new(self)
    }

    /// Free-text address resolution across all four levels
    pub fn lookup(&self) -> RegionLookupService<'_> {
        RegionLookupService::new(self)
    }

    /// Issue one GET for `path` under the base URL
    pub async fn request(&self, path: &str) -> Result<Envelope> {
        self.transport.fetch(path, self.config.timeout()).await
    }

    /// Request timeout in seconds
    pub fn timeout(&self) -> u64 {
        self.config.timeout_secs
    }

    /// Change the request timeout; applies to the next request.
    ///
    /// `0` disables the per-request timeout instead of failing every call.
    pub fn set_timeout(&mut self, timeout_secs: u64) -> &mut Self {
        self.config.timeout_secs = timeout_secs;
        self
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn global_search_concurrency(&self) -> usize {
        self.config.global_search_concurrency
    }
}
