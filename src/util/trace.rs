//! Installs the `tracing_subscriber` registry used by the server.
//!
//! Verbosity follows `RUST_LOG`, e.g.:
//! ```bash
//! RUST_LOG=deephistory=debug,history_diff=debug,tower_http=info
//! ```
//! Events emitted through `log` by the workspace libraries are forwarded
//! into the same subscriber.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Initialises the tracer, using tracing subscription.
/// This is optional, not calling this function will simply
/// not log traces.
pub fn initialize_tracer() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt_layer = tracing_subscriber::fmt::layer().compact();

    // `try_init` also installs the `log` bridge; it only fails when a
    // subscriber is already set, in which case that one is kept.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
