mod region_lookup_service;

pub use region_lookup_service::{AddressQuery, RegionLookupService, ResolvedAddress};
