use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use gavel_util::errors::GavelError;

use crate::version_catalog::{DependencyGroup, PlatformOutput, VersionCatalogBuilder};

/// The parsed representation of a `Platform.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformManifest {
    pub platform: PlatformMetadata,

    /// Named versions usable as `${name}` inside coordinates and set versions.
    #[serde(default)]
    pub versions: BTreeMap<String, String>,

    #[serde(default, rename = "enforced-imports")]
    pub enforced_imports: Vec<String>,

    #[serde(default, rename = "dependency-sets")]
    pub dependency_sets: Vec<DependencyGroup>,

    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// Platform identity from the `[platform]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformMetadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// The three builder input lists after `${name}` substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInputs {
    pub enforced_imports: Vec<String>,
    pub dependency_sets: Vec<DependencyGroup>,
    pub dependencies: Vec<String>,
}

impl PlatformManifest {
    /// Load and parse a `Platform.toml` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GavelError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        let manifest = Self::from_str(&content)?;
        tracing::info!(
            "Loaded platform {} from {}",
            manifest.platform.name,
            path.display()
        );
        Ok(manifest)
    }

    /// Parse a `Platform.toml` from a string.
    pub fn from_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            GavelError::Manifest {
                message: format!("Failed to parse Platform.toml: {e}"),
            }
            .into()
        })
    }

    /// Substitute `${name}` references from `[versions]` in every coordinate
    /// string and dependency-set version.
    pub fn resolve(&self) -> miette::Result<ResolvedInputs> {
        let enforced_imports = self
            .enforced_imports
            .iter()
            .enumerate()
            .map(|(i, s)| self.substitute(s, &format!("enforced-imports[{i}]")))
            .collect::<miette::Result<Vec<_>>>()?;

        let dependency_sets = self
            .dependency_sets
            .iter()
            .enumerate()
            .map(|(i, set)| -> miette::Result<DependencyGroup> {
                Ok(DependencyGroup {
                    version: self.substitute(&set.version, &format!("dependency-sets[{i}]"))?,
                    ..set.clone()
                })
            })
            .collect::<miette::Result<Vec<_>>>()?;

        let dependencies = self
            .dependencies
            .iter()
            .enumerate()
            .map(|(i, s)| self.substitute(s, &format!("dependencies[{i}]")))
            .collect::<miette::Result<Vec<_>>>()?;

        Ok(ResolvedInputs {
            enforced_imports,
            dependency_sets,
            dependencies,
        })
    }

    /// Resolve references and run the catalog builder over the result.
    pub fn build(&self, builder: &VersionCatalogBuilder) -> miette::Result<PlatformOutput> {
        let inputs = self.resolve()?;
        let output = builder.build(
            &inputs.enforced_imports,
            &inputs.dependency_sets,
            &inputs.dependencies,
        )?;
        Ok(output)
    }

    fn substitute(&self, input: &str, location: &str) -> miette::Result<String> {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        while let Some(start) = rest.find("${") {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            let key = &rest[start + 2..start + len];
            let value = self.versions.get(key).ok_or_else(|| GavelError::Manifest {
                message: format!("Unknown version reference '${{{key}}}' in {location}"),
            })?;
            out.push_str(&rest[..start]);
            out.push_str(value);
            rest = &rest[start + len + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}
