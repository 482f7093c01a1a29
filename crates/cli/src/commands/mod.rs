//! Subcommand implementations.

pub mod members;
pub mod roles;
