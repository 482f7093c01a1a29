//! Configuration loader for `.env` files and environment variables.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges explicit values over
//!   environment values.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Invariants / Assumptions:
//! - Explicit `with_*` values take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
