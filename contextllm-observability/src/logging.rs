//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Install a global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the supplied default filter. Calling
/// this more than once is harmless; later calls are ignored.
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
