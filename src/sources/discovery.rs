//! Provider discovery on the executable search path.
//!
//! Every directory on `PATH` is listed (one level, symlinks followed) and the
//! regular, executable files whose name starts with the provider prefix are
//! kept. A name found in several directories resolves to the first one, as a
//! shell lookup would. The result is sorted by name.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::sources::provider::ProviderDescriptor;
use crate::util::fs::is_executable;

/// The search path could not be determined.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("PATH is not set")]
    PathUnset,
}

/// Directories on the process's `PATH`.
pub fn search_path() -> Result<Vec<PathBuf>, DiscoveryError> {
    let path = std::env::var_os("PATH").ok_or(DiscoveryError::PathUnset)?;
    Ok(std::env::split_paths(&path).collect())
}

/// Discover providers named `{prefix}*` on `PATH`.
pub fn discover(prefix: &str) -> Result<Vec<ProviderDescriptor>, DiscoveryError> {
    Ok(discover_in(&search_path()?, prefix))
}

/// Discover providers named `{prefix}*` in the given directories.
///
/// Missing or unreadable directories are skipped.
pub fn discover_in<P: AsRef<Path>>(dirs: &[P], prefix: &str) -> Vec<ProviderDescriptor> {
    let mut found: BTreeMap<String, PathBuf> = BTreeMap::new();

    for dir in dirs {
        let dir = dir.as_ref();
        if dir.as_os_str().is_empty() {
            continue;
        }

        let entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true);

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!("skipping entry in {}: {}", dir.display(), e);
                    continue;
                }
            };

            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if !name.starts_with(prefix) || found.contains_key(name) {
                continue;
            }
            if !entry.file_type().is_file() || !is_executable(entry.path()) {
                continue;
            }

            tracing::debug!("found provider {}", entry.path().display());
            found.insert(name.to_string(), entry.path().to_path_buf());
        }
    }

    found
        .into_iter()
        .map(|(name, path)| ProviderDescriptor::new(name, path))
        .collect()
}
