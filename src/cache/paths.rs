// Cache path utilities.
// Resolves where the snapshot file lives in the platform cache directory.

use std::path::PathBuf;

use directories::BaseDirs;

const APP_NAME: &str = "ghtrend";
const SNAPSHOT_FILE: &str = "cache.json";

/// Get the base cache directory (~/.cache/ghtrend on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.cache_dir().join(APP_NAME))
}

/// Path to the trending snapshot file.
pub fn snapshot_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(SNAPSHOT_FILE))
}
