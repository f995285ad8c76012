use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Canonical region code shape: "31", "31.74", "31.74.09", "31.74.09.1001"
    pub static ref REGION_CODE_REGEX: Regex =
        Regex::new(r"^\d{2}(?:\.\d{2}(?:\.\d{2}(?:\.\d{4})?)?)?$").unwrap();
}

/// Administrative level of a region, largest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionLevel {
    /// Provinsi
    Province,
    /// Kabupaten/Kota
    Regency,
    /// Kecamatan
    District,
    /// Kelurahan/Desa
    Village,
}

impl RegionLevel {
    /// Infer the level from a canonical code. Returns `None` when the code
    /// does not have the usual `NN[.NN[.NN[.NNNN]]]` shape.
    pub fn from_code(code: &str) -> Option<Self> {
        if !REGION_CODE_REGEX.is_match(code) {
            return None;
        }
        match code.split('.').count() {
            1 => Some(RegionLevel::Province),
            2 => Some(RegionLevel::Regency),
            3 => Some(RegionLevel::District),
            4 => Some(RegionLevel::Village),
            _ => None,
        }
    }

    /// Level one step down the hierarchy
    pub fn child(self) -> Option<Self> {
        match self {
            RegionLevel::Province => Some(RegionLevel::Regency),
            RegionLevel::Regency => Some(RegionLevel::District),
            RegionLevel::District => Some(RegionLevel::Village),
            RegionLevel::Village => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RegionLevel::Province => "province",
            RegionLevel::Regency => "regency",
            RegionLevel::District => "district",
            RegionLevel::Village => "village",
        }
    }
}

impl std::fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RegionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "province" | "provinsi" => Ok(RegionLevel::Province),
            "regency" | "city" | "kabupaten" | "kota" => Ok(RegionLevel::Regency),
            "district" | "kecamatan" => Ok(RegionLevel::District),
            "village" | "kelurahan" | "desa" => Ok(RegionLevel::Village),
            other => Err(format!("Unknown region level: {}", other)),
        }
    }
}

/// A single administrative region as returned by wilayah.id.
///
/// Only `code` and `name` are modeled. Whatever else the API sends is kept
/// in `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub code: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Region {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn level(&self) -> Option<RegionLevel> {
        RegionLevel::from_code(&self.code)
    }

    /// Code of the enclosing region, `None` for provinces
    pub fn parent_code(&self) -> Option<&str> {
        self.code.rsplit_once('.').map(|(parent, _)| parent)
    }

    /// Whether this region's code sits directly or indirectly under `parent_code`
    pub fn is_child_of(&self, parent_code: &str) -> bool {
        self.code
            .strip_prefix(parent_code)
            .is_some_and(|rest| rest.starts_with('.'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_code() {
        assert_eq!(RegionLevel::from_code("31"), Some(RegionLevel::Province));
        assert_eq!(RegionLevel::from_code("31.74"), Some(RegionLevel::Regency));
        assert_eq!(RegionLevel::from_code("31.74.09"), Some(RegionLevel::District));
        assert_eq!(
            RegionLevel::from_code("31.74.09.1001"),
            Some(RegionLevel::Village)
        );
        assert_eq!(RegionLevel::from_code("999999"), None);
        assert_eq!(RegionLevel::from_code("31.74.09.10"), None);
        assert_eq!(RegionLevel::from_code(""), None);
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!("Kecamatan".parse::<RegionLevel>(), Ok(RegionLevel::District));
        assert_eq!("city".parse::<RegionLevel>(), Ok(RegionLevel::Regency));
        assert!("hamlet".parse::<RegionLevel>().is_err());
        assert_eq!(RegionLevel::Province.child(), Some(RegionLevel::Regency));
        assert_eq!(RegionLevel::Village.child(), None);
    }

    #[test]
    fn test_parent_code() {
        assert_eq!(Region::new("31", "DKI JAKARTA").parent_code(), None);
        assert_eq!(
            Region::new("31.74.09", "Jagakarsa").parent_code(),
            Some("31.74")
        );
    }

    #[test]
    fn test_is_child_of() {
        let village = Region::new("31.74.09.1001", "Jagakarsa");
        assert!(village.is_child_of("31.74.09"));
        assert!(village.is_child_of("31"));
        assert!(!village.is_child_of("31.7"));
        assert!(!village.is_child_of("31.74.09.1001"));
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let json = serde_json::json!({
            "code": "31",
            "name": "DKI JAKARTA",
            "coordinates": {"lat": -6.2, "lng": 106.8}
        });
        let region: Region = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(region.code, "31");
        assert!(region.extra.contains_key("coordinates"));
        assert_eq!(serde_json::to_value(&region).unwrap(), json);
    }
}
