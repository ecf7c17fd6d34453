// Cache store for the last successful search.
// Handles JSON serialization, freshness checks, and atomic writes.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::error::{GhtrendError, Result};
use crate::fallback;
use crate::github::Repository;
use crate::source::Origin;

/// Snapshots older than this are ignored: 15 minutes.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(15 * 60);

/// Wrapper for cached data with its capture time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedData<T> {
    /// When the data was cached.
    pub time: DateTime<Utc>,
    /// The cached data.
    pub data: T,
}

impl<T> CachedData<T> {
    /// Create a new cached data entry stamped with the current time.
    pub fn new(data: T) -> Self {
        Self::at(data, Utc::now())
    }

    pub fn at(data: T, time: DateTime<Utc>) -> Self {
        Self { time, data }
    }

    /// Check if this entry is older than `ttl` as of `now`.
    /// Entries stamped in the future count as expired.
    pub fn is_expired_at(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        let elapsed = now
            .signed_duration_since(self.time)
            .to_std()
            .unwrap_or(Duration::MAX);

        elapsed > ttl
    }
}

/// Read a cached entry, or `None` when the file does not exist.
pub fn read_cached<T: DeserializeOwned>(path: &Path) -> Result<Option<CachedData<T>>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&contents)?))
}

/// Write an entry as pretty JSON, staging it next to `path` and renaming
/// into place so readers never see a partial file.
pub fn write_cached<T: Serialize>(path: &Path, cached: &CachedData<T>) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let staging = path.with_extension("json.part");
    {
        let mut out = BufWriter::new(fs::File::create(&staging)?);
        serde_json::to_writer_pretty(&mut out, cached)?;
        out.flush()?;
        out.get_ref().sync_all()?;
    }
    fs::rename(&staging, path)?;
    Ok(())
}

/// Single-snapshot store for trending results.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: Option<PathBuf>,
    ttl: Duration,
}

impl CacheStore {
    /// Store backed by a specific file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ttl: FRESHNESS_WINDOW,
        }
    }

    /// Store in the platform cache directory, or a disabled store if there is none.
    pub fn open_default() -> Self {
        Self {
            path: super::paths::snapshot_path(),
            ttl: FRESHNESS_WINDOW,
        }
    }

    /// Cached repositories if a fresh, non-empty snapshot exists.
    pub fn load_fresh(&self, now: DateTime<Utc>) -> Option<Vec<Repository>> {
        let path = self.path.as_deref()?;

        match read_cached::<Vec<Repository>>(path) {
            Ok(Some(cached)) if cached.is_expired_at(self.ttl, now) => {
                debug!("Cache snapshot from {} is stale", cached.time);
                None
            }
            Ok(Some(cached)) if cached.data.is_empty() => {
                debug!("Cache snapshot is empty");
                None
            }
            Ok(Some(cached)) => Some(cached.data),
            Ok(None) => {
                debug!("No cache snapshot at {}", path.display());
                None
            }
            Err(e) => {
                debug!("Ignoring unreadable cache snapshot: {}", e);
                None
            }
        }
    }

    /// Cached repositories, or the built-in fallback list when the cache is unusable.
    pub fn load(&self, now: DateTime<Utc>) -> (Vec<Repository>, Origin) {
        match self.load_fresh(now) {
            Some(repos) => (repos, Origin::Cache),
            None => (fallback::repositories(), Origin::Fallback),
        }
    }

    /// Persist `repos` stamped with the current time.
    pub fn save(&self, repos: &[Repository]) -> Result<()> {
        let path = self.path.as_deref().ok_or(GhtrendError::NoCacheDir)?;
        write_cached(path, &CachedData::new(repos))
    }
}
