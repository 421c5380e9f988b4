//! One-shot logging setup shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber. Idempotent; safe to call from every test binary.
///
/// Verbosity comes from `TEST_LOG`, falling back to `RUST_LOG`, falling back
/// to `warn`. Output goes through `with_test_writer` so cargo captures it per
/// test, and timestamps are suppressed to keep assertions on log output stable.
pub fn init() {
    INSTALLED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
