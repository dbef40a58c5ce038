//! Operation: look up the catalog version of one group.

use std::path::Path;

use gavel_core::config::GlobalConfig;
use gavel_util::errors::GavelError;

/// Print and return the version the platform's catalog holds for `group`.
pub fn version(manifest_path: &Path, config: &GlobalConfig, group: &str) -> miette::Result<String> {
    let platform = crate::load_platform(manifest_path, config, false)?;
    let version = platform
        .output
        .catalog()
        .get(group)
        .map(str::to_string)
        .ok_or_else(|| GavelError::Catalog {
            message: format!(
                "No version for group '{group}' in platform {}",
                platform.name()
            ),
        })?;
    println!("{version}");
    Ok(version)
}
