use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trek_catalog::http::{self, AppState};
use trek_catalog::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides, e.g. RUST_LOG=trek_catalog=debug,tower_http=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("trek_catalog=info,tower_http=info")),
        )
        .with_target(false)
        .init();

    let settings = Settings::parse();
    tracing::info!(
        app = %settings.app_name,
        env = %settings.app_env,
        "starting trail service"
    );

    let catalog = settings
        .load_catalog()
        .context("failed to load trail catalog")?;
    let bind = settings.bind.clone();
    let state = Arc::new(AppState::new(settings, catalog));

    http::serve(state, &bind)
        .await
        .with_context(|| format!("server on {} failed", bind))?;
    Ok(())
}
