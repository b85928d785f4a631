//! Configuration file support.
//!
//! Configuration is read from `~/.clib/config.toml` (or `$CLIB_HOME/config.toml`).
//! Every key is optional; command-line flags take precedence.
//!
//! ```toml
//! [search]
//! cache_ttl_secs = 18000
//! provider_prefix = "clib-search-"
//!
//! [net]
//! timeout_secs = 30
//! wiki_url = "https://github.com/clibs/clib/wiki/Packages"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default page listing the known packages.
pub const DEFAULT_WIKI_URL: &str = "https://github.com/clibs/clib/wiki/Packages";

/// Default prefix shared by all search provider executables.
pub const DEFAULT_PROVIDER_PREFIX: &str = "clib-search-";

/// Default time a fetched payload stays fresh.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60 * 60);

/// Default HTTP request timeout.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// clib configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search settings
    pub search: SearchConfig,

    /// Network settings
    pub net: NetConfig,
}

/// Search-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Seconds before a cached payload must be refetched
    pub cache_ttl_secs: Option<u64>,

    /// Executable name prefix used to discover providers
    pub provider_prefix: Option<String>,
}

/// Network-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetConfig {
    /// HTTP request timeout in seconds
    pub timeout_secs: Option<u64>,

    /// Package wiki page
    pub wiki_url: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        self.search
            .cache_ttl_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_CACHE_TTL)
    }

    pub fn provider_prefix(&self) -> &str {
        self.search
            .provider_prefix
            .as_deref()
            .unwrap_or(DEFAULT_PROVIDER_PREFIX)
    }

    pub fn http_timeout(&self) -> Duration {
        self.net
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT)
    }

    pub fn wiki_url(&self) -> &str {
        self.net.wiki_url.as_deref().unwrap_or(DEFAULT_WIKI_URL)
    }
}

/// Get the global clib directory (~/.clib).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".clib"))
}
