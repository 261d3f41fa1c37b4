//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - Manual mocks are more explicit and easier to debug
//! - We control exactly what they return without macro magic
//! - The repository port is small enough that a hand-written in-memory
//!   implementation doubles as a realistic store

pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

/// Install a fmt subscriber for tests. Safe to call from every test; only
/// the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_test_writer()
        .try_init();
}
