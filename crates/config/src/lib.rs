//! Configuration management for the groups client.
//!
//! This crate provides the shared constants, the resolved [`Config`] type,
//! and a [`ConfigLoader`] that assembles configuration from a `.env` file,
//! environment variables, and explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::Config;
