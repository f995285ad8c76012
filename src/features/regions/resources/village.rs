use crate::client::Client;
use crate::core::error::Result;
use crate::core::http::child_listing_path;
use crate::features::regions::models::{Envelope, Village};
use crate::shared::constants::VILLAGES_PREFIX;
use crate::shared::matching;

/// Village (kelurahan/desa) accessor, scoped by district code
#[derive(Debug, Clone, Copy)]
pub struct VillageResource<'a> {
    client: &'a Client,
}

impl<'a> VillageResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List villages of a district (e.g. "31.74.09")
    pub async fn by_district(&self, district_code: &str) -> Result<Envelope> {
        self.client
            .request(&child_listing_path(VILLAGES_PREFIX, district_code))
            .await
    }

    /// Find a village by its code (e.g. "31.74.09.1001")
    pub async fn find(&self, district_code: &str, code: &str) -> Result<Option<Village>> {
        let villages = self.by_district(district_code).await?;
        Ok(matching::by_code(&villages.data, code).cloned())
    }

    pub async fn find_by_name(&self, district_code: &str, name: &str) -> Result<Option<Village>> {
        let villages = self.by_district(district_code).await?;
        Ok(matching::first_by_name(&villages.data, name).cloned())
    }

    pub async fn search(&self, district_code: &str, name: &str) -> Result<Vec<Village>> {
        let villages = self.by_district(district_code).await?;
        Ok(matching::all_by_name(&villages.data, name)
            .into_iter()
            .cloned()
            .collect())
    }
}
