//! Handler for `gavel export`.

use std::path::{Path, PathBuf};

use miette::Result;

use gavel_core::config::GlobalConfig;
use gavel_ops::ops_export::{self, ExportOptions};

pub fn exec(manifest: &Path, config: &GlobalConfig, output: Option<PathBuf>) -> Result<()> {
    ops_export::export(manifest, config, &ExportOptions { output })?;
    Ok(())
}
