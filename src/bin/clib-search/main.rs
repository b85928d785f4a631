//! clib-search - search every installed provider for packages
//!
//! Every executable on `PATH` named `clib-search-*` is a provider. Each one
//! prints `{"program": ..., "pkglist": [...]}` on stdout; the lists are
//! concatenated, filtered by the query terms and printed.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use clib::ops::{self, Palette};
use clib::util::shell::{ColorChoice, Shell, Status};
use clib::GlobalContext;

mod cli;

use cli::Cli;

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
    let opts = cli.search_options(ctx.config());

    let color = if opts.color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let shell = Shell::from_flags(cli.verbose, color);

    let results = ops::search(&opts, &shell);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if opts.json {
        ops::render_json(&mut out, &results.packages)
    } else {
        ops::render_text(&mut out, &results.packages, Palette::new(opts.color))
    }
    .context("failed to write search results")?;
    out.flush().context("failed to write search results")?;

    if !opts.json && results.packages.is_empty() {
        shell.note(format!("no packages matched ({} searched)", results.total));
    }
    shell.status(
        Status::Finished,
        format!(
            "{} of {} packages matched ({} providers, {} failed)",
            results.packages.len(),
            results.total,
            results.providers.len(),
            results.failures.len()
        ),
    );

    Ok(())
}
