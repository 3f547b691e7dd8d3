//! trek_catalog — read-only query service over a static catalog of trekking routes.
//!
//! The catalog is loaded once at startup and never mutated. Queries search,
//! filter, sort, and paginate it, or derive small aggregates (distinct
//! regions, counts per difficulty). The `http` feature exposes the same
//! operations as JSON endpoints.
//!
//! ```ignore
//! use trek_catalog::{Catalog, TrailQuery};
//!
//! let catalog = Catalog::seed()?;
//! let page = catalog.list(&TrailQuery::new().search("everest").limit(5));
//! let trail = catalog.get("poon-hill")?;
//! let regions = catalog.list_regions();
//! ```

mod catalog;
mod error;
mod query;
mod trail;

#[cfg(feature = "http")]
mod config;
#[cfg(feature = "http")]
pub mod http;

pub use catalog::{Catalog, CatalogError};
pub use error::TrailError;
pub use query::{SortKey, TrailPage, TrailQuery, ALL_DIFFICULTIES, DEFAULT_LIMIT, MAX_LIMIT};
pub use trail::Trail;

#[cfg(feature = "http")]
pub use config::{Settings, DEFAULT_CORS_ORIGINS};
