use thiserror::Error;

/// Failure to obtain the scene collection. Every variant means "empty tour".
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed scene payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewerError {
    #[error("panorama for scene \"{0}\" has an empty image source")]
    EmptySource(String),
    #[error("viewer rejected panorama \"{id}\": {reason}")]
    Rejected { id: String, reason: String },
}
