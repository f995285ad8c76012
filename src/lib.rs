//! # wilayah -- client for the wilayah.id Indonesian regions API
//!
//! Fetches provinces, regencies/cities, districts, and villages from
//! `https://wilayah.id/api` and offers lookup helpers on top of the listings:
//! exact code lookup, case-insensitive partial name search, and hierarchical
//! resolution of free-text addresses.
//!
//! ```no_run
//! # async fn run() -> wilayah::Result<()> {
//! let client = wilayah::Client::new()?;
//!
//! let jakarta = client.provinces().find_by_name("jakarta").await?;
//! if let Some(province) = jakarta {
//!     let selatan = client
//!         .regencies()
//!         .find_by_name(&province.code, "Jakarta Selatan")
//!         .await?;
//!     println!("{:?}", selatan.map(|r| r.code));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Nothing is cached: every accessor call is one request to the API (the
//! global regency search and address resolution make several).

mod client;
pub mod core;
pub mod features;
pub mod shared;

pub use crate::client::Client;
pub use crate::core::config::ClientConfig;
pub use crate::core::error::{Result, WilayahError};
pub use crate::features::regions::models::{Envelope, Region, RegionLevel};
pub use crate::features::regions::resources::{
    DistrictResource, ProvinceResource, RegencyResource, VillageResource,
};
pub use crate::features::regions::services::{AddressQuery, RegionLookupService, ResolvedAddress};
