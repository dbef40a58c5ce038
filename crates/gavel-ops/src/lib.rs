pub mod ops_check;
pub mod ops_export;
pub mod ops_show;
pub mod ops_version;

use std::path::{Path, PathBuf};

use gavel_core::config::GlobalConfig;
use gavel_core::manifest::PlatformManifest;
use gavel_core::version_catalog::{PlatformOutput, VersionCatalogBuilder};

/// A platform manifest together with the catalog built from it.
#[derive(Debug, Clone)]
pub struct LoadedPlatform {
    pub manifest_path: PathBuf,
    pub manifest: PlatformManifest,
    pub output: PlatformOutput,
}

impl LoadedPlatform {
    pub fn name(&self) -> &str {
        &self.manifest.platform.name
    }

    /// Directory holding the manifest; relative outputs are written here.
    pub fn project_root(&self) -> &Path {
        self.manifest_path.parent().unwrap_or(Path::new("."))
    }
}

/// Parse the manifest at `manifest_path` and build its catalog.
///
/// Dynamic versions are denied when either `deny_dynamic` or the global
/// `[catalog] deny-dynamic` setting asks for it.
pub fn load_platform(
    manifest_path: &Path,
    config: &GlobalConfig,
    deny_dynamic: bool,
) -> miette::Result<LoadedPlatform> {
    let manifest = PlatformManifest::from_path(manifest_path)?;
    let builder =
        VersionCatalogBuilder::new().deny_dynamic(deny_dynamic || config.catalog.deny_dynamic);
    let output = manifest.build(&builder)?;
    Ok(LoadedPlatform {
        manifest_path: manifest_path.to_path_buf(),
        manifest,
        output,
    })
}
