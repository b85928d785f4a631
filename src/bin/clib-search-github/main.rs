//! clib-search-github - package provider backed by the clib wiki
//!
//! Fetches the wiki's package page (through the search cache) and prints its
//! packages as `{"program": "clib-search-github", "pkglist": [...]}`.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use url::Url;

use clib::sources::remote::{load_through_cache, HttpFetcher, Origin};
use clib::sources::wiki;
use clib::util::shell::{ColorChoice, Shell};
use clib::{GlobalContext, ProviderOutput};

mod cli;

use cli::Cli;

const PROGRAM: &str = "clib-search-github";

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    clib::util::logging::init(cli.verbose);

    let ctx = GlobalContext::new();
    let config = ctx.config();
    let shell = Shell::from_flags(cli.verbose, ColorChoice::Auto);

    let url = cli.url.as_deref().unwrap_or_else(|| config.wiki_url());
    let url = Url::parse(url).with_context(|| format!("invalid wiki URL `{}`", url))?;

    let gate = ctx.cache_gate();
    let fetcher = HttpFetcher::new(config.http_timeout())?;
    let payload = load_through_cache(
        &gate,
        wiki::CACHE_KEY,
        &fetcher,
        url.as_str(),
        cli.skip_cache,
        &shell,
    )
    .context("failed to fetch wiki HTML")?;

    let packages = wiki::parse_packages(&payload.body);
    tracing::debug!(
        "{} packages from {}",
        packages.len(),
        match payload.origin {
            Origin::Cache => "cache",
            Origin::Network => url.as_str(),
        }
    );

    let output = ProviderOutput::new(PROGRAM, packages);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, &output).context("failed to write package list")?;
    writeln!(out).context("failed to write package list")?;

    Ok(())
}
