//! Tracing setup for the binary.
//!
//! Events go to stderr so they never interleave with the menu on stdout.
//! `RUST_LOG` selects the filter; without it only warnings are shown.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
