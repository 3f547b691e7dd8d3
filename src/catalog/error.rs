use std::fmt;
use std::path::PathBuf;

/// Error type for building a catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// The data file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The data was not a JSON array of trail records.
    Decode(String),
    /// Two records share the same id.
    DuplicateId(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io { path, source } => {
                write!(f, "failed to read catalog {}: {}", path.display(), source)
            }
            CatalogError::Decode(msg) => write!(f, "catalog decode failed: {}", msg),
            CatalogError::DuplicateId(id) => write!(f, "duplicate trail id in catalog: {}", id),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}
