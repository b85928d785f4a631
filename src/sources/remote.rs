//! Remote payload fetching with write-through caching.
//!
//! A fetch is a single HTTP GET: no retries, and redirects only as far as the
//! HTTP client follows them by default. A successful body is written to the
//! cache before it is handed back, so a crash after the write still leaves a
//! usable cache for the next run.

use std::time::Duration;

use thiserror::Error;

use crate::sources::cache::{CacheGate, CacheStatus};
use crate::util::shell::{error_chain, Shell, Status};

/// Failure to obtain a remote payload.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Something that can GET a URL.
pub trait Fetcher {
    /// Fetch the body of `url`.
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking HTTP fetcher with an explicit request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Create a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("clib/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;

        Ok(HttpFetcher { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}

/// Where a payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cache,
    Network,
}

/// A payload together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub body: String,
    pub origin: Origin,
}

/// Return the cached payload for `key` when fresh, otherwise fetch `url`
/// and overwrite the cache.
///
/// A failed cache write is logged and does not fail the call; a failed fetch
/// is returned as is, never replaced by an empty payload.
pub fn load_through_cache(
    gate: &CacheGate,
    key: &str,
    fetcher: &dyn Fetcher,
    url: &str,
    bypass: bool,
    shell: &Shell,
) -> Result<Payload, FetchError> {
    match gate.check(key, bypass) {
        CacheStatus::Fresh(body) => {
            tracing::debug!("using cached payload for `{}`", key);
            return Ok(Payload {
                body,
                origin: Origin::Cache,
            });
        }
        CacheStatus::Stale => {
            tracing::debug!("cache for `{}` is stale (ttl {:?})", key, gate.ttl())
        }
        CacheStatus::Missing => tracing::debug!("no cache for `{}`", key),
    }

    shell.status(Status::Fetching, url);
    tracing::debug!("setting cache `{}` from {}", key, url);
    let body = fetcher.fetch(url)?;

    if let Err(e) = gate.store(key, &body) {
        tracing::warn!("{}", error_chain(&e));
    }

    Ok(Payload {
        body,
        origin: Origin::Network,
    })
}
