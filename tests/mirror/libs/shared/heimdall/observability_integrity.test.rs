// [tests/mirror/libs/shared/heimdall/observability_integrity.test.rs]
//! Certifies that `init_tracing` can be installed exactly once per
//! process without panicking, for both supported output formats.

use hpss_observability::{init_tracing, LogFormat};

#[test]
fn installs_a_global_subscriber_and_panic_hook() {
    // Only one subscriber may be installed per process; this binary
    // has exactly one test function so this is safe.
    init_tracing("observability-integrity-test", LogFormat::Json);
    tracing::info!("subscriber installed");
}
