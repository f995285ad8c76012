use crate::client::Client;
use crate::core::error::Result;
use crate::features::regions::models::{Envelope, Province};
use crate::shared::constants::PROVINCES_PATH;
use crate::shared::matching;

/// Province (provinsi) accessor
#[derive(Debug, Clone, Copy)]
pub struct ProvinceResource<'a> {
    client: &'a Client,
}

impl<'a> ProvinceResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List every province in Indonesia
    pub async fn all(&self) -> Result<Envelope> {
        self.client.request(PROVINCES_PATH).await
    }

    /// Find a province by its code (e.g. "31")
    pub async fn find(&self, code: &str) -> Result<Option<Province>> {
        let provinces = self.all().await?;
        Ok(matching::by_code(&provinces.data, code).cloned())
    }

    /// First province whose name matches (case-insensitive, partial)
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Province>> {
        let provinces = self.all().await?;
        Ok(matching::first_by_name(&provinces.data, name).cloned())
    }

    /// All provinces whose name matches, in listing order
    pub async fn search(&self, name: &str) -> Result<Vec<Province>> {
        let provinces = self.all().await?;
        Ok(matching::all_by_name(&provinces.data, name)
            .into_iter()
            .cloned()
            .collect())
    }
}
