//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with default configuration.
///
/// `RUST_LOG` controls the filter; without it everything logs at `info`.
pub fn init_tracing() {
    init_tracing_with_default("info");
}

/// Initialize tracing with an explicit fallback filter directive,
/// still overridable through `RUST_LOG`.
pub fn init_tracing_with_default(directives: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
