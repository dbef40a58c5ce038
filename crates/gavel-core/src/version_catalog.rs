//! Version catalog construction.
//!
//! A platform is declared as three ordered lists: enforced platform imports,
//! dependency groups sharing one version, and individually versioned
//! dependencies. [`VersionCatalogBuilder`] turns them into the enforced
//! imports, the plain constraints, and the group-to-version catalog that
//! sibling build configuration reads.

use std::collections::BTreeMap;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coordinate::{CoordinateParseError, CoordinateTriple};

/// The input list a catalog entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecList {
    EnforcedImports,
    DependencyGroups,
    SingleDependencies,
}

impl fmt::Display for SpecList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EnforcedImports => "enforced-imports",
            Self::DependencyGroups => "dependency-sets",
            Self::SingleDependencies => "dependencies",
        };
        f.write_str(name)
    }
}

/// Several artifacts of one group published under a single version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyGroup {
    pub group: String,
    pub version: String,
    #[serde(rename = "modules")]
    pub members: Vec<String>,
}

impl DependencyGroup {
    pub fn new<I, M>(group: impl Into<String>, version: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        Self {
            group: group.into(),
            version: version.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// A fatal problem in the platform input. Building stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CatalogError {
    #[error("Malformed coordinate '{literal}' in {list}[{index}]: {reason}")]
    #[diagnostic(help("Coordinates must look like group:artifact:version with no empty fields"))]
    MalformedCoordinate {
        literal: String,
        list: SpecList,
        index: usize,
        reason: CoordinateParseError,
    },

    #[error("Artifact '{artifact}' appears more than once in dependency group '{group}' (dependency-sets[{index}])")]
    #[diagnostic(help("Remove the duplicate member from the group"))]
    DuplicateArtifactInGroup {
        group: String,
        artifact: String,
        index: usize,
    },

    #[error("Dependency group '{group}' (dependency-sets[{index}]) has no members")]
    EmptyGroup { group: String, index: usize },

    #[error("Invalid dependency group at dependency-sets[{index}]: {reason}")]
    InvalidGroup { index: usize, reason: String },

    #[error("Dynamic version in '{literal}' ({list}[{index}]) is not allowed")]
    #[diagnostic(help("Pin a fixed version, or turn off deny-dynamic"))]
    DynamicVersion {
        literal: String,
        list: SpecList,
        index: usize,
    },
}

/// Read-only mapping from group name to the version chosen for that group.
///
/// Later entries overwrite earlier ones while building, so each group maps to
/// the version of the last entry that mentioned it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionCatalog {
    versions: BTreeMap<String, String>,
}

impl VersionCatalog {
    pub fn get(&self, group: &str) -> Option<&str> {
        self.versions.get(group).map(String::as_str)
    }

    pub fn contains(&self, group: &str) -> bool {
        self.versions.contains_key(group)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Entries sorted by group name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.versions.iter().map(|(g, v)| (g.as_str(), v.as_str()))
    }

    fn upsert(&mut self, group: &str, version: &str) {
        if let Some(previous) = self.versions.insert(group.to_string(), version.to_string()) {
            if previous != version {
                tracing::debug!("Version for group {group} overridden: {previous} -> {version}");
            }
        }
    }
}

/// Everything a platform publishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformOutput {
    ordered_imports: Vec<CoordinateTriple>,
    constraints: Vec<CoordinateTriple>,
    catalog: Arc<VersionCatalog>,
}

impl PlatformOutput {
    /// Platforms to import with enforcement, in declaration order.
    pub fn ordered_imports(&self) -> &[CoordinateTriple] {
        &self.ordered_imports
    }

    /// Non-enforcing version constraints: group members first, then singles.
    pub fn constraints(&self) -> &[CoordinateTriple] {
        &self.constraints
    }

    pub fn catalog(&self) -> &VersionCatalog {
        &self.catalog
    }

    /// A shared handle to the catalog for consumers that outlive this output.
    pub fn shared_catalog(&self) -> Arc<VersionCatalog> {
        Arc::clone(&self.catalog)
    }
}

/// Builds a [`PlatformOutput`] from the three platform lists.
#[derive(Debug, Clone, Default)]
pub struct VersionCatalogBuilder {
    deny_dynamic: bool,
}

impl VersionCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject dynamic version selectors (`1.+`, `latest.release`, ranges)
    /// instead of only warning about them.
    pub fn deny_dynamic(mut self, deny: bool) -> Self {
        self.deny_dynamic = deny;
        self
    }

    /// Process enforced imports, then dependency groups, then single
    /// dependencies, in input order.
    pub fn build<E, S>(
        &self,
        enforced_imports: &[E],
        dependency_groups: &[DependencyGroup],
        single_dependencies: &[S],
    ) -> Result<PlatformOutput, CatalogError>
    where
        E: AsRef<str>,
        S: AsRef<str>,
    {
        tracing::debug!(
            "Building version catalog from {} enforced imports, {} dependency groups, {} dependencies",
            enforced_imports.len(),
            dependency_groups.len(),
            single_dependencies.len()
        );

        let mut ordered_imports = Vec::with_capacity(enforced_imports.len());
        let mut constraints = Vec::new();
        let mut catalog = VersionCatalog::default();

        for (index, spec) in enforced_imports.iter().enumerate() {
            let coord = self.parse_entry(spec.as_ref(), SpecList::EnforcedImports, index)?;
            catalog.upsert(&coord.group, &coord.version);
            ordered_imports.push(coord);
        }

        for (index, group) in dependency_groups.iter().enumerate() {
            validate_group(group, index)?;
            for member in &group.members {
                let coord = CoordinateTriple::new(&group.group, member, &group.version);
                self.check_version(&coord, SpecList::DependencyGroups, index)?;
                catalog.upsert(&coord.group, &coord.version);
                constraints.push(coord);
            }
        }

        for (index, spec) in single_dependencies.iter().enumerate() {
            let coord = self.parse_entry(spec.as_ref(), SpecList::SingleDependencies, index)?;
            catalog.upsert(&coord.group, &coord.version);
            constraints.push(coord);
        }

        tracing::debug!(
            "Version catalog built: {} imports, {} constraints, {} groups",
            ordered_imports.len(),
            constraints.len(),
            catalog.len()
        );

        Ok(PlatformOutput {
            ordered_imports,
            constraints,
            catalog: Arc::new(catalog),
        })
    }

    fn parse_entry(
        &self,
        literal: &str,
        list: SpecList,
        index: usize,
    ) -> Result<CoordinateTriple, CatalogError> {
        let coord =
            CoordinateTriple::parse(literal).map_err(|reason| CatalogError::MalformedCoordinate {
                literal: literal.to_string(),
                list,
                index,
                reason,
            })?;
        self.check_version(&coord, list, index)?;
        Ok(coord)
    }

    fn check_version(
        &self,
        coord: &CoordinateTriple,
        list: SpecList,
        index: usize,
    ) -> Result<(), CatalogError> {
        if !coord.has_dynamic_version() {
            return Ok(());
        }
        if self.deny_dynamic {
            return Err(CatalogError::DynamicVersion {
                literal: coord.to_string(),
                list,
                index,
            });
        }
        tracing::warn!("{coord} ({list}[{index}]) uses a dynamic version");
        Ok(())
    }
}

fn validate_group(group: &DependencyGroup, index: usize) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidGroup { index, reason };

    if group.group.is_empty() {
        return Err(invalid("group name is empty".to_string()));
    }
    if group.version.is_empty() {
        return Err(invalid(format!("group '{}' has an empty version", group.group)));
    }
    for (field, value) in [("group name", &group.group), ("version", &group.version)] {
        if value.contains(':') {
            return Err(invalid(format!("{field} '{value}' contains ':'")));
        }
    }
    if group.members.is_empty() {
        return Err(CatalogError::EmptyGroup {
            group: group.group.clone(),
            index,
        });
    }

    let mut seen = HashSet::with_capacity(group.members.len());
    for member in &group.members {
        if member.is_empty() || member.contains(':') {
            return Err(invalid(format!(
                "member '{member}' of group '{}' is not a valid artifact name",
                group.group
            )));
        }
        if !seen.insert(member.as_str()) {
            return Err(CatalogError::DuplicateArtifactInGroup {
                group: group.group.clone(),
                artifact: member.clone(),
                index,
            });
        }
    }
    Ok(())
}

/// Build with default settings: dynamic versions are accepted with a warning.
pub fn build<E, S>(
    enforced_imports: &[E],
    dependency_groups: &[DependencyGroup],
    single_dependencies: &[S],
) -> Result<PlatformOutput, CatalogError>
where
    E: AsRef<str>,
    S: AsRef<str>,
{
    VersionCatalogBuilder::new().build(enforced_imports, dependency_groups, single_dependencies)
}
