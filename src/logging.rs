// logging.rs
//
// sets up tracing

use std::io;

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber. Respects RUST_LOG, defaulting to
/// info. Diagnostics go to stderr so they survive stdout capture.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}
