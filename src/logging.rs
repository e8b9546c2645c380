//! Diagnostic logging
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=lexlight::syntax=trace` - module-level filtering
//!
//! Logs go to stderr so highlighted output on stdout stays clean.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the tracing subscriber
///
/// `verbose` lowers the default level from `warn` to `debug` when
/// RUST_LOG is not set.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    // A second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
