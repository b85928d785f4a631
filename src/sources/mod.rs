//! Package sources.
//!
//! Search providers are discovered on `PATH` and invoked as child processes.
//! Providers that read a remote page keep it in a time-boxed cache.

pub mod cache;
pub mod discovery;
pub mod provider;
pub mod remote;
pub mod wiki;

pub use cache::{CacheError, CacheGate, CacheStatus};
pub use discovery::{discover, discover_in, DiscoveryError};
pub use provider::{invoke, InvocationError, ProviderDescriptor};
pub use remote::{load_through_cache, FetchError, Fetcher, HttpFetcher, Origin, Payload};
