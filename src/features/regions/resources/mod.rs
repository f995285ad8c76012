mod district;
mod province;
mod regency;
mod village;

pub use district::DistrictResource;
pub use province::ProvinceResource;
pub use regency::RegencyResource;
pub use village::VillageResource;
