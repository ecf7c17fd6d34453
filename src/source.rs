// Result source: live search first, then the cache snapshot, then built-in data.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::Result;
use crate::github::client::GITHUB_API_BASE;
use crate::github::{GitHubClient, Repository, build_query};

/// Where a result set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Live,
    Cache,
    Fallback,
}

impl Origin {
    pub fn is_live(&self) -> bool {
        matches!(self, Origin::Live)
    }
}

/// Repositories together with their origin.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub repos: Vec<Repository>,
    pub origin: Origin,
}

/// Pick the first usable tier given the outcome of the live request.
pub fn resolve(live: Result<Vec<Repository>>, cache: &CacheStore, now: DateTime<Utc>) -> Fetched {
    match live {
        Ok(repos) if !repos.is_empty() => {
            return Fetched {
                repos,
                origin: Origin::Live,
            };
        }
        Ok(_) => warn!("Search returned no repositories → using cache"),
        Err(e) => warn!("Failed to fetch live data ({}) → using cache", e),
    }

    let (repos, origin) = cache.load(now);
    if origin == Origin::Fallback {
        info!("No cache → using built-in fallback");
    }
    Fetched { repos, origin }
}

/// Run the search for `config` and resolve it through the fallback chain.
pub async fn fetch(config: &Config, cache: &CacheStore) -> Fetched {
    fetch_from(GITHUB_API_BASE, config, cache).await
}

/// Same as [`fetch`] against a specific API root. A client that cannot be
/// built counts as a failed live request.
pub async fn fetch_from(base_url: &str, config: &Config, cache: &CacheStore) -> Fetched {
    let now = Utc::now();
    let query = build_query(&config.filters, now.date_naive());
    let live = match GitHubClient::new(config) {
        Ok(client) => {
            client
                .with_base_url(base_url)
                .search_repositories(&query, config.limit)
                .await
        }
        Err(e) => Err(e),
    };
    resolve(live, cache, Utc::now())
}

/// Save live results to the cache. Returns whether a snapshot was written;
/// a failed write is only logged.
pub fn persist(fetched: &Fetched, cache: &CacheStore) -> bool {
    if !fetched.origin.is_live() {
        return false;
    }
    match cache.save(&fetched.repos) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to save cache: {}", e);
            false
        }
    }
}
