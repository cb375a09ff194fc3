use thiserror::Error;

// Errors the host resolver can return
#[derive(Debug, Error)]
pub enum ResolveError {
    // The configuration snapshot could not be produced
    #[error("configuration unavailable: {0}")]
    ConfigUnavailable(String),

    // The configuration is valid but lists no clusters
    #[error("no cluster found in configuration")]
    NoClusterFound,
}

impl From<serde_json::Error> for ResolveError {
    fn from(e: serde_json::Error) -> Self {
        ResolveError::ConfigUnavailable(e.to_string())
    }
}

// Type alias for results that use `ResolveError` as the error type
pub type Result<T> = std::result::Result<T, ResolveError>;
