//! Package records and the provider wire format.
//!
//! Every search provider prints a single JSON document on stdout:
//!
//! ```json
//! {
//!   "program": "clib-search-github",
//!   "pkglist": [
//!     { "repo": "clibs/buffer", "url": "https://github.com/clibs/buffer", "desc": "..." }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// A discoverable package as reported by a search provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Repository identifier (`owner/name`)
    pub repo: String,

    /// Canonical URL
    pub url: String,

    /// Free-text description
    pub desc: String,
}

/// Ordered packages, in the order a provider reported them.
pub type PackageList = Vec<Package>;

impl Package {
    /// Create a new package record.
    pub fn new(repo: impl Into<String>, url: impl Into<String>, desc: impl Into<String>) -> Self {
        Package {
            repo: repo.into(),
            url: url.into(),
            desc: desc.into(),
        }
    }

    /// The package name: the last path component of the repository
    /// identifier, without any `@version` suffix.
    pub fn name(&self) -> &str {
        let name = self.repo.rsplit('/').next().unwrap_or(&self.repo);
        name.split('@').next().unwrap_or(name)
    }
}

/// The document a provider emits on stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOutput {
    /// Name of the provider program. Optional on input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,

    /// Reported packages
    pub pkglist: PackageList,
}

impl ProviderOutput {
    /// Create an output document for the named provider.
    pub fn new(program: impl Into<String>, pkglist: PackageList) -> Self {
        ProviderOutput {
            program: Some(program.into()),
            pkglist,
        }
    }
}
