// GitHub API response types.
// Defines the repository record shared by the search API, the cache, and JSON output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// GitHub repository as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Owner and name, e.g. `rust-lang/rust`.
    pub full_name: String,
    pub description: Option<String>,
    #[serde(rename = "stargazers_count")]
    pub stars: u64,
    pub language: Option<String>,
    pub html_url: String,
    /// Raw RFC 3339 creation timestamp. Kept as text so an unparseable value
    /// survives a cache round trip unchanged.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Repository {
    /// Parsed creation time, if present and valid.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Search endpoint response wrapper.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_count: u64,
    pub items: Vec<Repository>,
}
