//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` and `env_lock()` to prevent environment variable pollution.

use std::sync::Mutex;

pub mod dotenv_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
