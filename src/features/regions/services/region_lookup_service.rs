use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::core::error::Result;
use crate::features::regions::models::{District, Envelope, Province, Regency, Region, Village};
use crate::shared::constants::{
    DISTRICT_PREFIXES, PROVINCE_PREFIXES, REGENCY_PREFIXES, VILLAGE_PREFIXES,
};
use crate::shared::matching::{first_by_any_name, strip_admin_prefix};

/// Free-text address parts, any of which may be missing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressQuery {
    pub province: Option<String>,
    pub regency: Option<String>,
    pub district: Option<String>,
    pub village: Option<String>,
}

/// Regions resolved from an [`AddressQuery`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAddress {
    pub province: Option<Province>,
    pub regency: Option<Regency>,
    pub district: Option<District>,
    pub village: Option<Village>,
}

impl ResolvedAddress {
    /// Most specific region that was resolved
    pub fn deepest(&self) -> Option<&Region> {
        self.village
            .as_ref()
            .or(self.district.as_ref())
            .or(self.regency.as_ref())
            .or(self.province.as_ref())
    }
}

/// Service for resolving region names into region records
pub struct RegionLookupService<'a> {
    client: &'a Client,
}

impl<'a> RegionLookupService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Resolve location names down the hierarchy:
    /// province → regency → district → village
    ///
    /// Each level's listing is fetched once and matched against the name as
    /// given first, then with its administrative prefix ("Kabupaten ",
    /// "Kec. ", ...) stripped, so "Kota Bandung" stays apart from
    /// "Kabupaten Bandung". A regency may be found without a province, in
    /// which case the province comes from the same global search. Districts
    /// need a resolved regency and villages a resolved district. As soon as a
    /// requested level cannot be resolved the deeper levels are left empty
    /// and not fetched.
    pub async fn resolve(&self, query: &AddressQuery) -> Result<ResolvedAddress> {
        let mut result = ResolvedAddress::default();

        if let Some(province_name) = query.province.as_deref() {
            let provinces = self.client.provinces().all().await?;
            result.province = raw_then_stripped(&provinces, province_name, PROVINCE_PREFIXES);
            if result.province.is_none() {
                tracing::debug!("Province '{}' not found, stopping", province_name);
                return Ok(result);
            }
        }

        if let Some(regency_name) = query.regency.as_deref() {
            let regencies = self.client.regencies();

            let province_code = result.province.as_ref().map(|p| p.code.clone());

            result.regency = match province_code {
                Some(province_code) => {
                    let listing = regencies.by_province(&province_code).await?;
                    raw_then_stripped(&listing, regency_name, REGENCY_PREFIXES)
                }
                None => {
                    let provinces = self.client.provinces().all().await?;
                    let names = [
                        regency_name.trim(),
                        strip_admin_prefix(regency_name, REGENCY_PREFIXES),
                    ];
                    match regencies.first_in_provinces(&provinces, &names).await? {
                        Some((province, regency)) => {
                            result.province = Some(province.clone());
                            Some(regency)
                        }
                        None => None,
                    }
                }
            };

            if result.regency.is_none() {
                tracing::debug!("Regency '{}' not found, stopping", regency_name);
                return Ok(result);
            }
        }

        if let Some(district_name) = query.district.as_deref() {
            let Some(regency) = result.regency.as_ref() else {
                tracing::debug!("District '{}' needs a resolved regency", district_name);
                return Ok(result);
            };

            let districts = self.client.districts().by_regency(&regency.code).await?;
            result.district = raw_then_stripped(&districts, district_name, DISTRICT_PREFIXES);

            if result.district.is_none() {
                tracing::debug!("District '{}' not found, stopping", district_name);
                return Ok(result);
            }
        }

        if let Some(village_name) = query.village.as_deref() {
            let Some(district) = result.district.as_ref() else {
                tracing::debug!("Village '{}' needs a resolved district", village_name);
                return Ok(result);
            };

            let villages = self.client.villages().by_district(&district.code).await?;
            result.village = raw_then_stripped(&villages, village_name, VILLAGE_PREFIXES);
        }

        tracing::debug!(
            "Resolved regions: province={:?}, regency={:?}, district={:?}, village={:?}",
            result.province.as_ref().map(|r| &r.code),
            result.regency.as_ref().map(|r| &r.code),
            result.district.as_ref().map(|r| &r.code),
            result.village.as_ref().map(|r| &r.code)
        );

        Ok(result)
    }
}

/// Match the name as typed, falling back to the prefix-stripped name
fn raw_then_stripped(listing: &Envelope, name: &str, prefixes: &[&str]) -> Option<Region> {
    let names = [name.trim(), strip_admin_prefix(name, prefixes)];
    first_by_any_name(&listing.data, &names).cloned()
}
