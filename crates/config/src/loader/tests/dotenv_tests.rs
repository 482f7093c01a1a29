//! Tests for dotenv loading behavior.
//!
//! Invariants / Assumptions:
//! - Tests serialize mutations to process-global state (cwd/env).
//! - Error messages must never contain secret values from `.env` files.

use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

#[test]
#[serial]
fn test_invalid_dotenv_returns_parse_error() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    fs::write(temp_dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    temp_env::with_var("DOTENV_DISABLED", None::<&str>, || {
        let result = ConfigLoader::new().load_dotenv();
        assert!(matches!(result, Err(ConfigError::DotenvParse { .. })));
    });
}

#[test]
#[serial]
fn test_dotenv_parse_error_does_not_leak_secrets() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    let secret_value = "supersecret_key_12345";
    fs::write(
        temp_dir.path().join(".env"),
        format!("GROUPS_TEST_SECRET={}\nINVALID_LINE_WITHOUT_EQUALS", secret_value),
    )
    .unwrap();

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("GROUPS_TEST_SECRET", None::<&str>),
        ],
        || {
            let err = match ConfigLoader::new().load_dotenv() {
                Err(e) => e,
                Ok(_) => panic!("Expected error for invalid .env file"),
            };
            let message = err.to_string();
            assert!(!message.contains(secret_value));
            assert!(message.contains("DOTENV_DISABLED"));
        },
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_invalid_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    fs::write(temp_dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    for value in ["1", "true"] {
        temp_env::with_var("DOTENV_DISABLED", Some(value), || {
            assert!(ConfigLoader::new().load_dotenv().is_ok());
        });
    }
}
