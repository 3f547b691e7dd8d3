//! HTTP transport — exposes a `Catalog` over axum.
//!
//! Requires the `http` feature.
//!
//! ## Routes
//!
//! - `GET /` — service metadata.
//! - `GET /health` — liveness, with the catalog size.
//! - `GET /trails` — search, filter, sort, paginate.
//! - `GET /trails/:trail_id` — single trail, or 404 `{ "detail": ... }`.
//! - `GET /trails/regions/list` — `{ "regions": [...] }`.
//! - `GET /trails/difficulty/stats` — `{ "stats": { difficulty: count } }`.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use trek_catalog::{http, Catalog, Settings};
//!
//! let settings = Settings::default();
//! let state = Arc::new(http::AppState::new(settings, Catalog::seed()?));
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(state.clone());
//!
//! // Or serve directly
//! http::serve(state, "0.0.0.0:8000").await?;
//! ```

mod handlers;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::error::TrailError;

/// Shared, read-only state handed to every request handler.
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,
    pub catalog: Catalog,
}

impl AppState {
    pub fn new(settings: Settings, catalog: Catalog) -> Self {
        Self { settings, catalog }
    }
}

/// Build an axum `Router` serving the trail endpoints.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.settings.cors_origins);
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/trails", get(handlers::list_trails))
        .route("/trails/regions/list", get(handlers::list_regions))
        .route("/trails/difficulty/stats", get(handlers::difficulty_stats))
        .route("/trails/:trail_id", get(handlers::get_trail))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the catalog over HTTP at the given address (e.g. `"0.0.0.0:8000"`).
///
/// Returns once the listener fails or ctrl-c is received.
pub async fn serve(state: Arc<AppState>, addr: &str) -> Result<(), std::io::Error> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "trail service listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

/// Allow the configured origins with any method and any request headers.
///
/// Methods and headers are mirrored from the preflight rather than
/// wildcarded, since wildcards cannot be combined with credentials. For the
/// same reason a `*` origin is skipped.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            if origin.trim() == "*" {
                tracing::warn!(origin = %origin, "ignoring wildcard CORS origin");
                return None;
            }
            match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                    None
                }
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

impl IntoResponse for TrailError {
    fn into_response(self) -> Response {
        let status = axum::http::StatusCode::from_u16(self.status_code())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
