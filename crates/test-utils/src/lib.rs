pub mod builders;

use std::panic::UnwindSafe;
use std::sync::Once;

use exhausterr::{Exception, catch_exception};
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Run `f` and return the exception it raised, failing the test if it
/// returned normally instead.
pub fn expect_exception<F, R>(f: F) -> Exception
where
    F: FnOnce() -> R + UnwindSafe,
{
    match catch_exception(f) {
        Ok(_) => panic!("expected an exception, but the closure returned normally"),
        Err(exception) => exception,
    }
}
