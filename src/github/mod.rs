// GitHub API module.
// Provides the search client, query construction, and response types.

pub mod client;
pub mod query;
pub mod types;

pub use client::GitHubClient;
pub use query::build_query;
pub use types::*;
