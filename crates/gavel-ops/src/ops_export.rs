//! Operation: write the group-to-version catalog as JSON for sibling builds.

use std::path::{Path, PathBuf};

use gavel_core::config::GlobalConfig;
use gavel_util::errors::GavelError;
use gavel_util::fs::write_atomic;

/// Options for `gavel export`.
#[derive(Default)]
pub struct ExportOptions {
    /// Destination file; defaults to `[output] export-file` next to the manifest.
    pub output: Option<PathBuf>,
}

/// Build the platform and write its catalog. Returns the written path.
pub fn export(
    manifest_path: &Path,
    config: &GlobalConfig,
    opts: &ExportOptions,
) -> miette::Result<PathBuf> {
    let platform = crate::load_platform(manifest_path, config, false)?;
    let target = match opts.output {
        Some(ref path) => path.clone(),
        None => platform.project_root().join(&config.output.export_file),
    };

    let catalog = platform.output.catalog();
    let mut json = serde_json::to_string_pretty(catalog).map_err(|e| GavelError::Catalog {
        message: format!("Failed to serialize catalog: {e}"),
    })?;
    json.push('\n');
    write_atomic(&target, json.as_bytes()).map_err(|e| GavelError::Catalog {
        message: format!("Failed to write {}: {e}", target.display()),
    })?;

    tracing::info!("Wrote {} group versions to {}", catalog.len(), target.display());
    println!(
        "Exported {} group versions to {}",
        catalog.len(),
        target.display()
    );
    Ok(target)
}
