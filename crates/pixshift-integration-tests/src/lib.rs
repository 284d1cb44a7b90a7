//! Integration test crate; see `tests/`.

use std::sync::Once;

static INIT: Once = Once::new();

/// Opt-in log output while running tests (`RUST_LOG=debug cargo test`)
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}
