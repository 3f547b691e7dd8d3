use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::AppState;
use crate::error::TrailError;
use crate::query::{SortKey, TrailQuery, DEFAULT_LIMIT, MAX_LIMIT};

/// Query string accepted by `GET /trails`.
///
/// A repeated parameter keeps its last value; unknown parameters are ignored.
#[derive(Debug, Default)]
pub(super) struct ListParams {
    q: Option<String>,
    difficulty: Option<String>,
    region: Option<String>,
    max_days: Option<u32>,
    sort_by: Option<String>,
    limit: Option<usize>,
    offset: Option<usize>,
}

impl ListParams {
    fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, TrailError> {
        let mut params = Self::default();
        for (name, value) in pairs {
            match name.as_str() {
                "q" => params.q = Some(value),
                "difficulty" => params.difficulty = Some(value),
                "region" => params.region = Some(value),
                "sort_by" => params.sort_by = Some(value),
                "max_days" => params.max_days = Some(parse_number("max_days", &value)?),
                "limit" => params.limit = Some(parse_number("limit", &value)?),
                "offset" => params.offset = Some(parse_number("offset", &value)?),
                _ => {}
            }
        }
        Ok(params)
    }

    /// Translate wire parameters into a query.
    ///
    /// An unrecognized `sort_by` disables sorting; only an over-cap `limit`
    /// is rejected.
    fn into_query(self) -> Result<TrailQuery, TrailError> {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if limit > MAX_LIMIT {
            return Err(TrailError::InvalidParameter(format!(
                "limit must be less than or equal to {}",
                MAX_LIMIT
            )));
        }

        let mut query = TrailQuery::new()
            .limit(limit)
            .offset(self.offset.unwrap_or(0));
        query.q = self.q;
        query.difficulty = self.difficulty;
        query.region = self.region;
        query.max_days = self.max_days;
        query.sort_by = match self.sort_by.as_deref() {
            None => Some(SortKey::Rating),
            Some(name) => SortKey::parse(name),
        };
        Ok(query)
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, TrailError> {
    value.parse().map_err(|_| {
        TrailError::InvalidParameter(format!(
            "{} must be a non-negative integer, got '{}'",
            name, value
        ))
    })
}

/// `GET /`: service name, version, and a map of the available endpoints.
pub(super) async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "service": state.settings.app_name,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "environment": state.settings.app_env,
        "endpoints": {
            "health": "/health",
            "trails": "/trails",
            "trail_detail": "/trails/{id}",
            "regions": "/trails/regions/list",
            "difficulty_stats": "/trails/difficulty/stats",
        },
    }))
}

/// `GET /health`
pub(super) async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "status": "ok", "trails": state.catalog.len() }))
}

/// `GET /trails`
pub(super) async fn list_trails(
    State(state): State<Arc<AppState>>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let query = match params {
        Ok(Query(pairs)) => ListParams::from_pairs(pairs).and_then(ListParams::into_query),
        Err(rejection) => Err(TrailError::InvalidParameter(rejection.body_text())),
    };
    match query {
        Ok(query) => Json(state.catalog.list(&query)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// `GET /trails/:trail_id`
pub(super) async fn get_trail(
    State(state): State<Arc<AppState>>,
    Path(trail_id): Path<String>,
) -> Response {
    match state.catalog.get(&trail_id) {
        Ok(trail) => Json(trail).into_response(),
        Err(e) => {
            tracing::debug!(trail_id = %trail_id, "trail not found");
            e.into_response()
        }
    }
}

/// `GET /trails/regions/list`
pub(super) async fn list_regions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "regions": state.catalog.list_regions() }))
}

/// `GET /trails/difficulty/stats`
pub(super) async fn difficulty_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({ "stats": state.catalog.difficulty_stats() }))
}
