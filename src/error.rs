// Error types for ghtrend.
// Covers GitHub API failures, cache I/O, and output errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhtrendError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("GitHub API returned HTTP {0}")]
    Status(u16),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No user cache directory available")]
    NoCacheDir,

    #[error("Failed to open browser: {0}")]
    Browser(String),
}

pub type Result<T> = std::result::Result<T, GhtrendError>;
