//! Tracing subscriber setup for the `rueel` binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `RUEEL_LOG=rueel=trace`.
pub const LOG_ENV_VAR: &str = "RUEEL_LOG";

/// Install a stderr fmt subscriber so reports on stdout stay clean.
///
/// `RUEEL_LOG` wins when set; otherwise `default_filter` is used.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Default filter for the given verbosity flag.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}
