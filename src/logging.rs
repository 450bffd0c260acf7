//! Developer tracing.
//!
//! Tracing goes to stderr and is quiet by default: only `warn` and above,
//! unless `XPMATCH_LOG` holds a filter directive or `--verbose` is given.
//! It is separate from the diagnostic lines reporting skipped sources, which
//! are always printed.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "XPMATCH_LOG";

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging(verbose: bool) {
    let filter = build_env_filter(verbose);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_env_filter(verbose: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return filter;
    }
    EnvFilter::new(default_level(verbose))
}

fn default_level(verbose: bool) -> &'static str {
    if verbose { "xpmatch=debug" } else { "warn" }
}
