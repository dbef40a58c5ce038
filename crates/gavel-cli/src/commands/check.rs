//! Handler for `gavel check`.

use std::path::Path;

use miette::Result;

use gavel_core::config::GlobalConfig;
use gavel_ops::ops_check::{self, CheckOptions};

pub fn exec(manifest: &Path, config: &GlobalConfig, deny_dynamic: bool) -> Result<()> {
    ops_check::check(manifest, config, &CheckOptions { deny_dynamic })?;
    Ok(())
}
