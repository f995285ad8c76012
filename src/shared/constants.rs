/// Production base URL of the wilayah.id API
pub const DEFAULT_BASE_URL: &str = "https://wilayah.id/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Identifying client header sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("wilayah-client/", env!("CARGO_PKG_VERSION"));

/// Province listings kept in flight by the global regency search
pub const DEFAULT_GLOBAL_SEARCH_CONCURRENCY: usize = 4;

// =============================================================================
// ENDPOINTS
// =============================================================================

pub const PROVINCES_PATH: &str = "/provinces.json";
pub const REGENCIES_PREFIX: &str = "/regencies";
pub const DISTRICTS_PREFIX: &str = "/districts";
pub const VILLAGES_PREFIX: &str = "/villages";

// =============================================================================
// ADMINISTRATIVE PREFIXES
// =============================================================================

/// Prefixes stripped from free-text province names before matching
pub const PROVINCE_PREFIXES: &[&str] = &["Provinsi ", "Prov. ", "Prov "];

/// Prefixes stripped from free-text regency/city names before matching
pub const REGENCY_PREFIXES: &[&str] = &["Kabupaten ", "Kab. ", "Kab ", "Kota "];

/// Prefixes stripped from free-text district names before matching
pub const DISTRICT_PREFIXES: &[&str] = &["Kecamatan ", "Kec. ", "Kec "];

/// Prefixes stripped from free-text village names before matching
pub const VILLAGE_PREFIXES: &[&str] = &["Kelurahan ", "Kel. ", "Desa ", "Ds. "];
