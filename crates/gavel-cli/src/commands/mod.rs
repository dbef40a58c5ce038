//! Command dispatch and handler modules.

mod check;
mod export;
mod show;
mod version;

use std::path::PathBuf;

use miette::Result;

use gavel_core::config::GlobalConfig;
use gavel_core::MANIFEST_FILE_NAME;
use gavel_util::errors::GavelError;
use gavel_util::fs::find_ancestor_with;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let manifest = manifest_path(cli.manifest)?;
    let config = load_config();
    match cli.command {
        Command::Show { json } => show::exec(&manifest, &config, json),
        Command::Check { deny_dynamic } => check::exec(&manifest, &config, deny_dynamic),
        Command::Version { group } => version::exec(&manifest, &config, &group),
        Command::Export { output } => export::exec(&manifest, &config, output),
    }
}

/// Use the explicit manifest path, or walk up from the current directory.
fn manifest_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let cwd = std::env::current_dir().map_err(GavelError::Io)?;
    let root = find_ancestor_with(&cwd, MANIFEST_FILE_NAME).ok_or_else(|| GavelError::Manifest {
        message: format!("Could not find {MANIFEST_FILE_NAME} in this directory or any parent"),
    })?;
    Ok(root.join(MANIFEST_FILE_NAME))
}

fn load_config() -> GlobalConfig {
    GlobalConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load global config, using defaults: {e}");
        GlobalConfig::default()
    })
}
