//! CLI definitions using clap.

use clap::Parser;

/// Print the packages listed on the clib wiki as provider JSON
#[derive(Parser, Debug)]
#[command(name = "clib-search-github")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Skip the search cache
    #[arg(short = 'c', long)]
    pub skip_cache: bool,

    /// Wiki page listing the packages (defaults to the configured page)
    #[arg(short = 'u', long, env = "CLIB_WIKI_URL")]
    pub url: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["clib-search-github"]);

        assert!(!cli.skip_cache);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "clib-search-github",
            "-c",
            "--url",
            "http://localhost:8080/Packages",
        ]);

        assert!(cli.skip_cache);
        assert_eq!(cli.url.as_deref(), Some("http://localhost:8080/Packages"));
    }
}
