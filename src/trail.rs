use serde::{Deserialize, Serialize};

/// One trekking route in the catalog.
///
/// The first ten fields drive search, filtering, and sorting. The rest are
/// descriptive and are passed through to clients untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    pub id: String,
    pub name: String,
    pub region: String,
    /// Category string such as `easy`, `moderate`, `hard`, or `expert`.
    pub difficulty: String,
    pub duration_days: u32,
    pub distance_km: f64,
    pub max_elevation_m: f64,
    pub rating: f64,
    pub review_count: u64,
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_point: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_point: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permits: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub best_season: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

impl Trail {
    /// Case-insensitive free-text match against name, region, and tags.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.region.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}
