//! Diagnostic logging setup
//!
//! Logs go to stderr so they never mix with a report written to stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a log filter, checked before `RUST_LOG`
pub const LOG_ENV: &str = "KITSCAN_LOG";

/// Pick the log filter: `--verbose`, then `KITSCAN_LOG`, then `RUST_LOG`, then warnings only
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("kitscan=debug");
    }
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("kitscan=warn"))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(verbose: bool, use_colors: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(use_colors)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(log_filter(verbose))
        .with(fmt_layer)
        .try_init();
}
