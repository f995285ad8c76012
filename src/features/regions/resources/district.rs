use crate::client::Client;
use crate::core::error::Result;
use crate::core::http::child_listing_path;
use crate::features::regions::models::{District, Envelope};
use crate::shared::constants::DISTRICTS_PREFIX;
use crate::shared::matching;

/// District (kecamatan) accessor, scoped by regency code
#[derive(Debug, Clone, Copy)]
pub struct DistrictResource<'a> {
    client: &'a Client,
}

impl<'a> DistrictResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List districts of a regency (e.g. "31.74")
    pub async fn by_regency(&self, regency_code: &str) -> Result<Envelope> {
        self.client
            .request(&child_listing_path(DISTRICTS_PREFIX, regency_code))
            .await
    }

    pub async fn find(&self, regency_code: &str, code: &str) -> Result<Option<District>> {
        let districts = self.by_regency(regency_code).await?;
        Ok(matching::by_code(&districts.data, code).cloned())
    }

    pub async fn find_by_name(&self, regency_code: &str, name: &str) -> Result<Option<District>> {
        let districts = self.by_regency(regency_code).await?;
        Ok(matching::first_by_name(&districts.data, name).cloned())
    }

    pub async fn search(&self, regency_code: &str, name: &str) -> Result<Vec<District>> {
        let districts = self.by_regency(regency_code).await?;
        Ok(matching::all_by_name(&districts.data, name)
            .into_iter()
            .cloned()
            .collect())
    }
}
