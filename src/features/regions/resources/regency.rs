use std::pin::pin;

use futures::stream::{self, StreamExt};

use crate::client::Client;
use crate::core::error::{Result, WilayahError};
use crate::core::http::child_listing_path;
use crate::features::regions::models::{Envelope, Province, Regency};
use crate::shared::constants::REGENCIES_PREFIX;
use crate::shared::matching;

/// Regency/city (kabupaten/kota) accessor, scoped by province code
#[derive(Debug, Clone, Copy)]
pub struct RegencyResource<'a> {
    client: &'a Client,
}

impl<'a> RegencyResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List regencies of a province (e.g. "31")
    pub async fn by_province(&self, province_code: &str) -> Result<Envelope> {
        self.client
            .request(&child_listing_path(REGENCIES_PREFIX, province_code))
            .await
    }

    /// Find a regency by its code (e.g. "31.74") within a province
    pub async fn find(&self, province_code: &str, code: &str) -> Result<Option<Regency>> {
        let regencies = self.by_province(province_code).await?;
        Ok(matching::by_code(&regencies.data, code).cloned())
    }

    /// First regency in a province whose name matches
    pub async fn find_by_name(&self, province_code: &str, name: &str) -> Result<Option<Regency>> {
        let regencies = self.by_province(province_code).await?;
        Ok(matching::first_by_name(&regencies.data, name).cloned())
    }

    /// Find a regency by name without knowing its province.
    ///
    /// Lists provinces, then each province's regencies, and returns the first
    /// match in province listing order. Up to `global_search_concurrency`
    /// listings are in flight at once, but results are consumed in province
    /// order, so a later province that answers first never wins. An error
    /// from a province before the first match is returned as is.
    pub async fn find_by_name_global(&self, name: &str) -> Result<Option<Regency>> {
        let provinces = self.client.provinces().all().await?;
        let found = self.first_in_provinces(&provinces, &[name]).await?;
        Ok(found.map(|(_, regency)| regency))
    }

    /// Scan the regencies of already listed provinces, in province order.
    ///
    /// Each province listing is fetched once and checked against `names` in
    /// order before moving to the next province. The matching province is
    /// returned alongside the regency.
    pub(crate) async fn first_in_provinces<'p>(
        &self,
        provinces: &'p Envelope,
        names: &[&str],
    ) -> Result<Option<(&'p Province, Regency)>> {
        let concurrency = self.client.global_search_concurrency();

        tracing::debug!(
            "Global regency search for {:?} across {} provinces (concurrency {})",
            names,
            provinces.len(),
            concurrency
        );

        let mut lookups = pin!(stream::iter(provinces.data.iter())
            .map(|province| async move {
                let regencies = self.by_province(&province.code).await?;
                let found = matching::first_by_any_name(&regencies.data, names).cloned();
                Ok::<_, WilayahError>(found.map(|regency| (province, regency)))
            })
            .buffered(concurrency));

        while let Some(result) = lookups.next().await {
            if let Some((province, regency)) = result? {
                tracing::debug!("Resolved regency {:?} -> {}", names, regency.code);
                return Ok(Some((province, regency)));
            }
        }

        Ok(None)
    }

    /// All regencies in a province whose name matches, in listing order
    pub async fn search(&self, province_code: &str, name: &str) -> Result<Vec<Regency>> {
        let regencies = self.by_province(province_code).await?;
        Ok(matching::all_by_name(&regencies.data, name)
            .into_iter()
            .cloned()
            .collect())
    }
}
