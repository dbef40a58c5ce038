//! Shared utilities for gavel.
//!
//! Cross-cutting concerns used by the other gavel crates: the unified error
//! type and the filesystem helpers for locating and writing platform files.

pub mod errors;
pub mod fs;
