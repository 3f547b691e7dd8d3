use std::fmt;

/// Error returned by catalog queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailError {
    /// No trail carries the requested id.
    NotFound(String),
    /// A query parameter is outside the accepted contract (e.g. `limit` above the cap).
    InvalidParameter(String),
}

impl fmt::Display for TrailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrailError::NotFound(id) => write!(f, "Trail '{}' not found", id),
            TrailError::InvalidParameter(msg) => write!(f, "invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for TrailError {}

impl TrailError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            TrailError::NotFound(_) => 404,
            TrailError::InvalidParameter(_) => 422,
        }
    }
}
