//! Time-boxed payload cache.
//!
//! Each cache key maps to a single file in the cache directory holding the
//! raw payload of the last successful fetch. Freshness is judged from the
//! file's modification time alone; there is no header or metadata.
//!
//! No locking is performed. Concurrent runs race last-writer-wins, but writes
//! are atomic renames, so a reader sees either the old or the new payload.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use thiserror::Error;

use crate::util::fs::write_atomic;
use crate::util::shell::error_chain;

/// Result of checking the cache for a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheStatus {
    /// The stored payload is younger than the TTL.
    Fresh(String),
    /// A payload exists but is too old, or the cache was bypassed.
    Stale,
    /// Nothing usable is stored for the key.
    Missing,
}

/// Filesystem failure while reading or writing the cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to read cache file `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write cache file `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Decides whether a stored payload may be reused.
#[derive(Debug, Clone)]
pub struct CacheGate {
    dir: PathBuf,
    ttl: Duration,
}

impl CacheGate {
    /// Create a gate over `dir` with a fixed TTL.
    pub fn new(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        CacheGate {
            dir: dir.into(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Path of the cache file for a key.
    pub fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Check the cache for `key` against the current time.
    pub fn check(&self, key: &str, bypass: bool) -> CacheStatus {
        self.check_at(key, bypass, SystemTime::now())
    }

    /// Check the cache for `key` as of `now`.
    ///
    /// Read failures are reported as [`CacheStatus::Missing`]. A modification
    /// time in the future counts as age zero.
    pub fn check_at(&self, key: &str, bypass: bool, now: SystemTime) -> CacheStatus {
        let path = self.path(key);

        if bypass {
            tracing::debug!("skipping cache file ({})", path.display());
            return CacheStatus::Stale;
        }

        let modified = match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => match meta.modified() {
                Ok(modified) => modified,
                Err(e) => {
                    tracing::debug!("no modification time for {}: {}", path.display(), e);
                    return CacheStatus::Missing;
                }
            },
            Ok(_) => return CacheStatus::Missing,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::debug!("cannot stat {}: {}", path.display(), e);
                }
                return CacheStatus::Missing;
            }
        };

        let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
        tracing::debug!(
            "cache age {}s, ttl {}s ({})",
            age.as_secs(),
            self.ttl.as_secs(),
            path.display()
        );

        if age >= self.ttl {
            return CacheStatus::Stale;
        }

        match self.read(key) {
            Ok(payload) => CacheStatus::Fresh(payload),
            Err(e) => {
                tracing::debug!("{}", error_chain(&e));
                CacheStatus::Missing
            }
        }
    }

    /// Read the stored payload regardless of age.
    pub fn read(&self, key: &str) -> Result<String, CacheError> {
        let path = self.path(key);
        fs::read_to_string(&path).map_err(|source| CacheError::Read { path, source })
    }

    /// Overwrite the payload for `key`.
    pub fn store(&self, key: &str, payload: &str) -> Result<(), CacheError> {
        let path = self.path(key);
        write_atomic(&path, payload.as_bytes())
            .map_err(|source| CacheError::Write { path: path.clone(), source })?;
        tracing::debug!("wrote cache ({})", path.display());
        Ok(())
    }
}
