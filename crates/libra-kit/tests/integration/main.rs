//! Integration tests for libra-kit.
//!
//! Everything runs offline: wallet derivation against known vectors, account
//! decoding from hand-built node responses, and the sign/verify round trip.
//!
//! Set `RUST_LOG=libra_kit=trace` to see the library's logging.

mod account_decoding_integration;
mod golden_vector_integration;
mod offline_signing_integration;

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
