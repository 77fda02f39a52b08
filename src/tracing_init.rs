//! Tracing initialization for the binary and for tests.
//!
//! Filtering is environment driven, e.g.:
//! - `RUST_LOG=rustysarsat=debug`
//! - `RUST_LOG=rustysarsat::position=trace`

#[cfg(test)]
use once_cell::sync::Lazy;

/// Initialize tracing for tests. Safe to call from every test; the
/// subscriber is installed once.
#[cfg(test)]
pub fn init_test_tracing() {
    static TRACING: Lazy<()> = Lazy::new(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rustysarsat=warn"));

        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_line_number(true)
            .with_test_writer()
            .init();
    });

    Lazy::force(&TRACING);
}

/// Initialize tracing for the transmitter binary. Call early in main().
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rustysarsat=info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
