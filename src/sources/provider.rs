//! Search providers: executables that print a package list as JSON.
//!
//! A provider is run to completion before its output is parsed. Failures are
//! scoped to the one provider; callers decide whether to carry on.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use thiserror::Error;

use crate::core::package::{PackageList, ProviderOutput};
use crate::util::process::ProcessBuilder;

/// Flag passed to a provider to make it bypass its cache.
pub const SKIP_CACHE_FLAG: &str = "-c";

/// A discovered provider executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDescriptor {
    name: String,
    path: PathBuf,
}

impl ProviderDescriptor {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        ProviderDescriptor {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Executable file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full path the provider is run from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Failure of a single provider invocation.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("failed to run provider `{name}`")]
    Spawn {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("provider `{name}` failed ({status})")]
    Failed { name: String, status: ExitStatus },

    #[error("provider `{name}` produced invalid output")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl InvocationError {
    /// Name of the provider that failed.
    pub fn provider(&self) -> &str {
        match self {
            InvocationError::Spawn { name, .. }
            | InvocationError::Failed { name, .. }
            | InvocationError::Parse { name, .. } => name,
        }
    }
}

/// Run a provider and parse the package list it prints.
///
/// The provider's stderr is passed through to ours.
pub fn invoke(provider: &ProviderDescriptor, skip_cache: bool) -> Result<PackageList, InvocationError> {
    let mut cmd = ProcessBuilder::new(provider.path()).inherit_stderr();
    if skip_cache {
        cmd = cmd.arg(SKIP_CACHE_FLAG);
    }

    tracing::debug!("running `{}`", cmd.display_command());
    let output = cmd.exec().map_err(|source| InvocationError::Spawn {
        name: provider.name().to_string(),
        source,
    })?;

    if !output.status.success() {
        return Err(InvocationError::Failed {
            name: provider.name().to_string(),
            status: output.status,
        });
    }

    parse_output(provider.name(), &output.stdout)
}

/// Parse captured provider stdout.
///
/// Empty or whitespace-only output is an empty package list.
pub fn parse_output(name: &str, stdout: &[u8]) -> Result<PackageList, InvocationError> {
    if stdout.iter().all(u8::is_ascii_whitespace) {
        tracing::debug!("provider `{}` printed nothing", name);
        return Ok(PackageList::new());
    }

    let output: ProviderOutput =
        serde_json::from_slice(stdout).map_err(|source| InvocationError::Parse {
            name: name.to_string(),
            source,
        })?;

    tracing::debug!(
        "provider `{}` (program `{}`) reported {} packages",
        name,
        output.program.as_deref().unwrap_or(name),
        output.pkglist.len()
    );

    Ok(output.pkglist)
}
