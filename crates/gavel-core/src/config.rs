use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use gavel_util::errors::GavelError;

/// Global user configuration loaded from `~/.gavel/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

/// Catalog builder settings from `[catalog]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default, rename = "deny-dynamic")]
    pub deny_dynamic: bool,
}

/// Output settings from `[output]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_export_file", rename = "export-file")]
    pub export_file: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            export_file: default_export_file(),
        }
    }
}

fn default_export_file() -> String {
    "versions.json".to_string()
}

/// How `gavel show` renders a platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl GlobalConfig {
    /// Load the global configuration, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load the configuration from an explicit path, or defaults if it is absent.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| GavelError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            GavelError::Config {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the gavel data directory: `$GAVEL_HOME`, else `~/.gavel/`.
pub fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("GAVEL_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(home);
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".gavel")
}
