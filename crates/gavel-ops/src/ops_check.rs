//! Operation: validate a platform manifest without producing output files.

use std::path::Path;

use gavel_core::config::GlobalConfig;

/// Options for `gavel check`.
#[derive(Default)]
pub struct CheckOptions {
    /// Fail on dynamic versions even if the global config allows them.
    pub deny_dynamic: bool,
}

/// Counts reported by a successful check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    pub name: String,
    pub enforced_imports: usize,
    pub constraints: usize,
    pub groups: usize,
}

impl std::fmt::Display for CheckSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Platform {} OK: {} enforced imports, {} constraints, {} groups",
            self.name, self.enforced_imports, self.constraints, self.groups
        )
    }
}

/// Build the platform and report what it would publish.
pub fn check(
    manifest_path: &Path,
    config: &GlobalConfig,
    opts: &CheckOptions,
) -> miette::Result<CheckSummary> {
    let platform = crate::load_platform(manifest_path, config, opts.deny_dynamic)?;
    let summary = CheckSummary {
        name: platform.name().to_string(),
        enforced_imports: platform.output.ordered_imports().len(),
        constraints: platform.output.constraints().len(),
        groups: platform.output.catalog().len(),
    };
    println!("{summary}");
    Ok(summary)
}
