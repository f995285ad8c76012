mod envelope;
mod region;

pub use envelope::Envelope;
pub use region::{Region, RegionLevel, REGION_CODE_REGEX};

/// Province (provinsi) record
pub type Province = Region;
/// Regency/city (kabupaten/kota) record
pub type Regency = Region;
/// District (kecamatan) record
pub type District = Region;
/// Village (kelurahan/desa) record
pub type Village = Region;
