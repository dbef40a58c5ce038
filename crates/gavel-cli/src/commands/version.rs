use std::path::Path;

use miette::Result;

use gavel_core::config::GlobalConfig;

pub fn exec(manifest: &Path, config: &GlobalConfig, group: &str) -> Result<()> {
    gavel_ops::ops_version::version(manifest, config, group)?;
    Ok(())
}
