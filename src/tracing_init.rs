//! Tracing initialization for tests and binaries.
//!
//! The core pipeline only emits `tracing` events; it never installs a
//! subscriber itself (that's configuration wiring, out of scope per §1).
//! This module provides opt-in helpers for binaries and tests, the same
//! role `tracing_init` plays in the project this crate's structure is
//! modeled on.

#[cfg(test)]
use once_cell::sync::Lazy;

/// Initialize tracing for tests with environment-based filtering.
///
/// Uses `RUST_LOG` to control output, e.g. `RUST_LOG=linksim::modulation=trace`.
/// Call this once at the start of any test that wants to see trace output.
/// Safe to call from every test (uses `once_cell` to init only once).
#[cfg(test)]
pub fn init_test_tracing() {
    static TRACING: Lazy<()> = Lazy::new(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("linksim=warn"));

        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_test_writer()
            .init();
    });

    Lazy::force(&TRACING);
}

/// Initialize tracing for binaries with environment-based filtering.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("linksim=info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
