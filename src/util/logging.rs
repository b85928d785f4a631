//! Logging setup shared by the clib binaries.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "CLIB_LOG";

/// Install the stderr tracing subscriber.
///
/// `CLIB_LOG` wins when set; otherwise `verbose` selects debug output for
/// the library.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("clib=debug")
        } else {
            EnvFilter::new("clib=info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
