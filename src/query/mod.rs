//! The filter / sort / paginate pipeline over a trail collection.
//!
//! A `TrailQuery` is built with chained setters and run against a catalog:
//!
//! ```ignore
//! use trek_catalog::{Catalog, SortKey, TrailQuery};
//!
//! let catalog = Catalog::seed()?;
//! let page = catalog.list(
//!     &TrailQuery::new()
//!         .search("glacier")
//!         .difficulty("hard")
//!         .sort_by(SortKey::Distance)
//!         .limit(5),
//! );
//! assert!(page.total >= page.trails.len());
//! ```
//!
//! Filters apply in a fixed order (text search, difficulty, region,
//! duration) and are evaluated as one predicate per record. Empty strings
//! count as "not provided".

mod page;
mod sort;

pub use page::TrailPage;
pub use sort::SortKey;

use crate::trail::Trail;

/// Default page size.
pub const DEFAULT_LIMIT: usize = 20;
/// Largest page a caller may request.
pub const MAX_LIMIT: usize = 100;
/// Difficulty value meaning "any difficulty".
pub const ALL_DIFFICULTIES: &str = "all";

/// Search, filter, sort, and paging parameters for listing trails.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailQuery {
    /// Free text matched against name, region, and tags.
    pub q: Option<String>,
    /// Exact, case-sensitive difficulty. `"all"` disables the filter.
    pub difficulty: Option<String>,
    /// Case-insensitive substring of the region.
    pub region: Option<String>,
    /// Inclusive upper bound on `duration_days`.
    pub max_days: Option<u32>,
    /// `None` leaves the filtered order untouched.
    pub sort_by: Option<SortKey>,
    pub limit: usize,
    pub offset: usize,
}

impl Default for TrailQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl TrailQuery {
    /// No filters, sorted by rating, first page of `DEFAULT_LIMIT`.
    pub fn new() -> Self {
        Self {
            q: None,
            difficulty: None,
            region: None,
            max_days: None,
            sort_by: Some(SortKey::Rating),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }

    pub fn search(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn max_days(mut self, days: u32) -> Self {
        self.max_days = Some(days);
        self
    }

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort_by = Some(key);
        self
    }

    /// Keep the filtered order instead of sorting.
    pub fn unsorted(mut self) -> Self {
        self.sort_by = None;
        self
    }

    /// Set the page size, capped at `MAX_LIMIT`.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(MAX_LIMIT);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Run the pipeline over `trails`, returning one page plus the match count.
    pub fn run<'a>(&self, trails: &'a [Trail]) -> TrailPage<'a> {
        let predicate = Predicate::from_query(self);
        let mut matched: Vec<&Trail> = trails.iter().filter(|t| predicate.matches(t)).collect();

        if let Some(key) = self.sort_by {
            key.sort(&mut matched);
        }

        TrailPage::slice(matched, self.offset, self.limit)
    }
}

/// All active filters of a query, with text needles lowercased once.
struct Predicate<'q> {
    needle: Option<String>,
    difficulty: Option<&'q str>,
    region: Option<String>,
    max_days: Option<u32>,
}

impl<'q> Predicate<'q> {
    fn from_query(query: &'q TrailQuery) -> Self {
        Self {
            needle: non_empty(&query.q).map(str::to_lowercase),
            difficulty: non_empty(&query.difficulty).filter(|d| *d != ALL_DIFFICULTIES),
            region: non_empty(&query.region).map(str::to_lowercase),
            max_days: query.max_days,
        }
    }

    fn matches(&self, trail: &Trail) -> bool {
        if let Some(needle) = &self.needle {
            if !trail.matches_text(needle) {
                return false;
            }
        }
        if let Some(difficulty) = self.difficulty {
            if trail.difficulty != difficulty {
                return false;
            }
        }
        if let Some(region) = &self.region {
            if !trail.region.to_lowercase().contains(region.as_str()) {
                return false;
            }
        }
        if let Some(max_days) = self.max_days {
            if trail.duration_days > max_days {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
