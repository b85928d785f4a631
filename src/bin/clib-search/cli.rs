//! CLI definitions using clap.

use clap::Parser;

use clib::ops::SearchOptions;
use clib::util::Config;
use clib::QueryTerms;

/// Search every installed clib-search provider for packages
#[derive(Parser, Debug)]
#[command(name = "clib-search")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Skip the search cache
    #[arg(short = 'c', long)]
    pub skip_cache: bool,

    /// Don't colorize output
    #[arg(short = 'n', long)]
    pub no_color: bool,

    /// Generate a serialized JSON output
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Terms to match against package names and descriptions
    pub query: Vec<String>,
}

impl Cli {
    /// Build search options from the flags and the loaded config.
    pub fn search_options(&self, config: &Config) -> SearchOptions {
        SearchOptions {
            skip_cache: self.skip_cache,
            color: !self.no_color && !self.json,
            json: self.json,
            terms: QueryTerms::new(&self.query),
            provider_prefix: config.provider_prefix().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["clib-search"]);

        assert!(!cli.skip_cache);
        assert!(!cli.no_color);
        assert!(!cli.json);
        assert!(cli.query.is_empty());
    }

    #[test]
    fn test_short_flags() {
        let cli = parse(&["clib-search", "-c", "-n", "-j", "buffer"]);

        assert!(cli.skip_cache);
        assert!(cli.no_color);
        assert!(cli.json);
        assert_eq!(cli.query, vec!["buffer"]);
    }

    #[test]
    fn test_long_flags_and_terms() {
        let cli = parse(&["clib-search", "--skip-cache", "--no-color", "list", "JSON"]);

        assert!(cli.skip_cache);
        assert!(cli.no_color);
        assert_eq!(cli.query, vec!["list", "JSON"]);
    }

    #[test]
    fn test_search_options() {
        let cli = parse(&["clib-search", "-c", "Buffer"]);
        let opts = cli.search_options(&Config::default());

        assert!(opts.skip_cache);
        assert!(opts.color);
        assert!(!opts.json);
        assert_eq!(opts.terms, QueryTerms::new(["buffer"]));
        assert_eq!(opts.provider_prefix, "clib-search-");
    }

    #[test]
    fn test_json_disables_color() {
        let cli = parse(&["clib-search", "--json"]);
        let opts = cli.search_options(&Config::default());

        assert!(opts.json);
        assert!(!opts.color);
    }
}
