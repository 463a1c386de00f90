//! Shared test support.

/// Initialize a tracing subscriber for tests that want to see the
/// toolkit's trace output. Honors `RUST_LOG`; safe to call more than once.
#[allow(dead_code)]
pub fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
