use serde::Serialize;

use crate::trail::Trail;

/// One page of a filtered, sorted result set.
///
/// `total` counts every matching trail, not just the ones on this page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrailPage<'a> {
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    pub trails: Vec<&'a Trail>,
}

impl<'a> TrailPage<'a> {
    /// Slice `[offset, offset + limit)` out of the full result set.
    ///
    /// An offset at or past the end yields an empty page.
    pub(crate) fn slice(matched: Vec<&'a Trail>, offset: usize, limit: usize) -> Self {
        let total = matched.len();
        let trails = matched.into_iter().skip(offset).take(limit).collect();
        TrailPage {
            total,
            offset,
            limit,
            trails,
        }
    }

    pub fn ids(&self) -> Vec<&str> {
        self.trails.iter().map(|t| t.id.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    pub fn len(&self) -> usize {
        self.trails.len()
    }
}
