//! Service settings, read from command-line flags or the environment.

use std::path::PathBuf;

use clap::Parser;

use crate::catalog::{Catalog, CatalogError};

pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:3001"];

/// Runtime settings for the trail service.
///
/// Every flag can also be supplied through the environment variable named
/// in its help text.
#[derive(Debug, Clone, Parser)]
#[command(name = "trek_catalog", version, about = "HTTP query service for Nepal trekking routes")]
pub struct Settings {
    /// Service name reported by `GET /`.
    #[arg(long, env = "APP_NAME", default_value = "Trek Nepal API")]
    pub app_name: String,

    /// Deployment environment label reported by `GET /`.
    #[arg(long, env = "APP_ENV", default_value = "development")]
    pub app_env: String,

    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8000")]
    pub bind: String,

    /// JSON file of trail records. The built-in catalog is used when absent.
    #[arg(long = "data", env = "TRAILS_DATA")]
    pub data: Option<PathBuf>,

    /// Origins allowed to make cross-origin requests.
    #[arg(
        long = "cors-origin",
        env = "CORS_ORIGINS",
        value_delimiter = ',',
        default_values = DEFAULT_CORS_ORIGINS
    )]
    pub cors_origins: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "Trek Nepal API".into(),
            app_env: "development".into(),
            bind: "0.0.0.0:8000".into(),
            data: None,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

impl Settings {
    /// Load the catalog these settings point at.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.data {
            Some(path) => Catalog::from_path(path),
            None => Catalog::seed(),
        }
    }
}
