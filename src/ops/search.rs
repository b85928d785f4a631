//! Implementation of `clib-search`.
//!
//! Providers run one at a time, each drained and parsed before the next one
//! starts. A provider that fails contributes nothing; the run always
//! completes with whatever the other providers returned.

use crate::core::package::{Package, PackageList};
use crate::core::query::QueryTerms;
use crate::sources::discovery::discover;
use crate::sources::provider::{invoke, InvocationError, ProviderDescriptor};
use crate::util::config::DEFAULT_PROVIDER_PREFIX;
use crate::util::shell::{error_chain, Shell, Status};

/// Options for a search run.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Ask providers to bypass their caches
    pub skip_cache: bool,

    /// Highlight text output
    pub color: bool,

    /// Print matches as a JSON array
    pub json: bool,

    /// Terms to match
    pub terms: QueryTerms,

    /// Executable name prefix of providers
    pub provider_prefix: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            skip_cache: false,
            color: true,
            json: false,
            terms: QueryTerms::default(),
            provider_prefix: DEFAULT_PROVIDER_PREFIX.to_string(),
        }
    }
}

/// Package lists of the providers that succeeded, and the failures of the rest.
#[derive(Debug, Default)]
pub struct Collected {
    pub lists: Vec<PackageList>,
    pub failures: Vec<InvocationError>,
}

/// Outcome of a search run.
#[derive(Debug, Default)]
pub struct SearchResults {
    /// Providers that were invoked
    pub providers: Vec<ProviderDescriptor>,

    /// Matching packages, in provider order
    pub packages: PackageList,

    /// Providers that failed
    pub failures: Vec<InvocationError>,

    /// Packages reported before filtering
    pub total: usize,
}

/// Invoke each provider in order, isolating failures.
pub fn collect_with<F>(providers: &[ProviderDescriptor], mut invoke: F) -> Collected
where
    F: FnMut(&ProviderDescriptor) -> Result<PackageList, InvocationError>,
{
    let mut collected = Collected::default();
    for provider in providers {
        match invoke(provider) {
            Ok(list) => collected.lists.push(list),
            Err(e) => collected.failures.push(e),
        }
    }
    collected
}

/// Concatenate package lists, keeping list order and order within each list.
pub fn aggregate<I>(lists: I) -> PackageList
where
    I: IntoIterator<Item = PackageList>,
{
    lists.into_iter().flatten().collect()
}

/// Keep the packages matching `terms`, in input order.
pub fn filter<I>(packages: I, terms: &QueryTerms) -> PackageList
where
    I: IntoIterator<Item = Package>,
{
    packages.into_iter().filter(|pkg| terms.matches(pkg)).collect()
}

/// Discover providers on `PATH` and search them.
pub fn search(opts: &SearchOptions, shell: &Shell) -> SearchResults {
    let providers = match discover(&opts.provider_prefix) {
        Ok(providers) => providers,
        Err(e) => {
            shell.warn(format!("{}; no providers searched", e));
            Vec::new()
        }
    };

    search_providers(providers, opts, shell)
}

/// Search the given providers.
pub fn search_providers(
    providers: Vec<ProviderDescriptor>,
    opts: &SearchOptions,
    shell: &Shell,
) -> SearchResults {
    if providers.is_empty() {
        shell.warn(format!(
            "no search providers found (looked for `{}*` on PATH)",
            opts.provider_prefix
        ));
    }

    let progress = shell.progress(providers.len() as u64, "Searching");
    let collected = collect_with(&providers, |provider| {
        if shell.is_verbose() {
            shell.status(Status::Searching, provider.name());
        }
        let result = invoke(provider, opts.skip_cache);
        progress.inc(1);
        result
    });
    progress.finish();

    for failure in &collected.failures {
        shell.status(Status::Skipped, error_chain(failure));
    }

    let total = collected.lists.iter().map(Vec::len).sum();
    let packages = filter(aggregate(collected.lists), &opts.terms);
    tracing::debug!(
        "{} of {} packages matched across {} providers",
        packages.len(),
        total,
        providers.len()
    );

    SearchResults {
        providers,
        packages,
        failures: collected.failures,
        total,
    }
}
