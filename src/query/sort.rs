use std::cmp::Ordering;
use std::fmt;

use crate::trail::Trail;

/// Field a result set can be ordered by.
///
/// `Rating` and `Reviews` sort highest first; `Distance` and `Elevation`
/// sort lowest first. Sorting is stable, so ties keep their filtered order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Rating,
    Distance,
    Elevation,
    Reviews,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Rating,
        SortKey::Distance,
        SortKey::Elevation,
        SortKey::Reviews,
    ];

    /// Parse a wire name. Unknown names yield `None` rather than an error.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Distance => "distance",
            SortKey::Elevation => "elevation",
            SortKey::Reviews => "reviews",
        }
    }

    pub fn compare(&self, a: &Trail, b: &Trail) -> Ordering {
        match self {
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Distance => a.distance_km.total_cmp(&b.distance_km),
            SortKey::Elevation => a.max_elevation_m.total_cmp(&b.max_elevation_m),
            SortKey::Reviews => b.review_count.cmp(&a.review_count),
        }
    }

    pub(crate) fn sort(&self, trails: &mut [&Trail]) {
        trails.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
