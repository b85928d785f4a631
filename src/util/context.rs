//! Global context for clib operations.
//!
//! Provides centralized access to configuration and paths.

use std::path::PathBuf;

use crate::sources::cache::CacheGate;
use crate::util::config::{global_config_dir, Config};

/// Overrides the clib home directory (default `~/.clib`).
pub const HOME_ENV: &str = "CLIB_HOME";

/// Overrides the cache directory (default: the system temporary directory).
pub const CACHE_DIR_ENV: &str = "CLIB_CACHE_DIR";

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Directory holding cached payloads
    cache_dir: PathBuf,

    /// Loaded configuration
    config: Config,
}

impl GlobalContext {
    /// Create a context from the environment, loading the config file if present.
    pub fn new() -> Self {
        let home = std::env::var_os(HOME_ENV)
            .map(PathBuf::from)
            .or_else(global_config_dir)
            .unwrap_or_else(|| PathBuf::from(".clib"));

        let cache_dir = std::env::var_os(CACHE_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir);

        Self::with_paths(home, cache_dir)
    }

    /// Create a context from `<home>/config.toml` and an explicit cache directory.
    pub fn with_paths(home: PathBuf, cache_dir: PathBuf) -> Self {
        let config = Config::load_or_default(&home.join("config.toml"));
        tracing::debug!(
            "home: {}, cache dir: {}",
            home.display(),
            cache_dir.display()
        );

        GlobalContext { cache_dir, config }
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A cache gate over the cache directory using the configured TTL.
    pub fn cache_gate(&self) -> CacheGate {
        CacheGate::new(self.cache_dir.clone(), self.config.cache_ttl())
    }
}

impl Default for GlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
