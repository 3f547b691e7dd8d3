//! Catalog — the read-only trail collection and the queries it answers.
//!
//! A catalog is built once at startup (from the embedded seed data, a JSON
//! file, or plain values) and never changes afterwards. Every query is a
//! pure function of the catalog and its arguments, so a catalog can be
//! shared behind an `Arc` with no locking.

mod error;

pub use error::CatalogError;

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

use crate::error::TrailError;
use crate::query::{TrailPage, TrailQuery};
use crate::trail::Trail;

const SEED: &str = include_str!("../../data/trails.json");

/// An immutable, ordered collection of trails with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    trails: Vec<Trail>,
}

impl Catalog {
    /// Build a catalog from records, rejecting duplicate ids.
    pub fn from_trails(trails: Vec<Trail>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(trails.len());
        for trail in &trails {
            if !seen.insert(trail.id.as_str()) {
                return Err(CatalogError::DuplicateId(trail.id.clone()));
            }
        }
        Ok(Self { trails })
    }

    /// Parse a JSON array of trail records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let trails: Vec<Trail> = serde_json::from_str(json)?;
        Self::from_trails(trails)
    }

    /// Load a JSON array of trail records from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), trails = catalog.len(), "loaded trail catalog");
        Ok(catalog)
    }

    /// The catalog shipped with the binary.
    pub fn seed() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(SEED)?;
        tracing::info!(trails = catalog.len(), "loaded seed trail catalog");
        Ok(catalog)
    }

    pub fn trails(&self) -> &[Trail] {
        &self.trails
    }

    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    /// Search, filter, sort, and paginate.
    pub fn list(&self, query: &TrailQuery) -> TrailPage<'_> {
        let page = query.run(&self.trails);
        tracing::debug!(
            total = page.total,
            returned = page.len(),
            offset = page.offset,
            limit = page.limit,
            "listed trails"
        );
        page
    }

    /// Look up a single trail by exact id.
    pub fn get(&self, id: &str) -> Result<&Trail, TrailError> {
        self.trails
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| TrailError::NotFound(id.to_string()))
    }

    /// Distinct regions, sorted ascending.
    pub fn list_regions(&self) -> Vec<&str> {
        self.trails
            .iter()
            .map(|t| t.region.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of trails per difficulty. Only difficulties that occur are present.
    pub fn difficulty_stats(&self) -> BTreeMap<&str, usize> {
        let mut stats = BTreeMap::new();
        for trail in &self.trails {
            *stats.entry(trail.difficulty.as_str()).or_insert(0) += 1;
        }
        stats
    }
}
