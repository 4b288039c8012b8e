use thiserror::Error;

/// Error type for write operations against the recipe API.
///
/// Read operations never surface this type - they degrade to empty/`None`
/// sentinels and log instead (see `api`).
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to encode recipe payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Invalid image: {0}")]
    InvalidImage(String),
}
