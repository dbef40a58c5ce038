//! Core data types for gavel.
//!
//! This crate defines what a dependency platform is made of: coordinates,
//! the `Platform.toml` data tables, the version catalog builder that turns
//! those tables into enforced imports, constraints and a group-to-version
//! catalog, and the global user configuration.
//!
//! This crate is intentionally free of async code and network I/O.

/// Default manifest file name looked up by the CLI.
pub const MANIFEST_FILE_NAME: &str = "Platform.toml";

pub mod config;
pub mod coordinate;
pub mod manifest;
pub mod version_catalog;
