// Cache module for local filesystem caching.
// Keeps the last live search result for offline and failure fallback.

pub mod paths;
pub mod store;

pub use paths::{cache_dir, snapshot_path};
pub use store::{CacheStore, CachedData, FRESHNESS_WINDOW, read_cached, write_cached};
