use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging to stdout.
///
/// Honors `RUST_LOG` when set and defaults to `info` otherwise.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();
}
