use serde::{Deserialize, Serialize};

use crate::features::regions::models::Region;
use crate::shared::matching;

/// `{ data, meta }` wrapper returned by every listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub data: Vec<Region>,
    #[serde(default)]
    pub meta: serde_json::Map<String, serde_json::Value>,
}

impl Envelope {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Exact code lookup over records already fetched
    pub fn find_by_code(&self, code: &str) -> Option<&Region> {
        matching::by_code(&self.data, code)
    }

    /// First record whose name matches, case-insensitive and partial
    pub fn find_by_name(&self, name: &str) -> Option<&Region> {
        matching::first_by_name(&self.data, name)
    }

    /// All records whose name matches, in listing order
    pub fn search(&self, name: &str) -> Vec<&Region> {
        matching::all_by_name(&self.data, name)
    }

    pub fn into_data(self) -> Vec<Region> {
        self.data
    }
}

impl IntoIterator for Envelope {
    type Item = Region;
    type IntoIter = std::vec::IntoIter<Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
