//! Indonesian administrative regions (wilayah) feature.
//!
//! Accessors over the wilayah.id JSON API for provinces, regencies/cities,
//! districts, and villages, plus name-based lookup across the hierarchy.
//!
//! ## Data Hierarchy
//!
//! - Level 1: Provinces (Provinsi), code `31`
//! - Level 2: Regencies/Cities (Kabupaten/Kota), code `31.74`
//! - Level 3: Districts (Kecamatan), code `31.74.09`
//! - Level 4: Villages (Kelurahan/Desa), code `31.74.09.1001`
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Accessor |
//! |--------|----------|----------|
//! | GET | `/provinces.json` | [`ProvinceResource::all`] |
//! | GET | `/regencies/{province_code}.json` | [`RegencyResource::by_province`] |
//! | GET | `/districts/{regency_code}.json` | [`DistrictResource::by_regency`] |
//! | GET | `/villages/{district_code}.json` | [`VillageResource::by_district`] |

pub mod models;
pub mod resources;
pub mod services;

pub use resources::{DistrictResource, ProvinceResource, RegencyResource, VillageResource};
pub use services::RegionLookupService;
