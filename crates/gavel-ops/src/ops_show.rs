//! Operation: print a platform's imports, constraints and catalog.

use std::fmt::{self, Write};
use std::path::Path;

use console::style;
use serde::Serialize;

use gavel_core::config::{GlobalConfig, OutputFormat};
use gavel_core::version_catalog::PlatformOutput;
use gavel_util::errors::GavelError;

use crate::LoadedPlatform;

/// Options for `gavel show`.
#[derive(Default)]
pub struct ShowOptions {
    /// Overrides `[output] format` from the global config.
    pub format: Option<OutputFormat>,
}

#[derive(Serialize)]
struct PlatformView<'a> {
    name: &'a str,
    #[serde(flatten)]
    output: &'a PlatformOutput,
}

/// Build the platform and print it in the requested format.
pub fn show(manifest_path: &Path, config: &GlobalConfig, opts: &ShowOptions) -> miette::Result<()> {
    let platform = crate::load_platform(manifest_path, config, false)?;
    let format = opts.format.unwrap_or(config.output.format);
    print!("{}", render(&platform, format)?);
    Ok(())
}

/// Render a loaded platform as text or pretty JSON.
pub fn render(platform: &LoadedPlatform, format: OutputFormat) -> miette::Result<String> {
    match format {
        OutputFormat::Json => {
            let view = PlatformView {
                name: platform.name(),
                output: &platform.output,
            };
            let mut json = serde_json::to_string_pretty(&view).map_err(|e| GavelError::Catalog {
                message: format!("Failed to serialize platform: {e}"),
            })?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => render_text(platform).map_err(|e| {
            GavelError::Catalog {
                message: format!("Failed to render platform: {e}"),
            }
            .into()
        }),
    }
}

fn render_text(platform: &LoadedPlatform) -> Result<String, fmt::Error> {
    let output = &platform.output;
    let mut out = String::new();

    writeln!(out, "{}", style(format!("Platform {}", platform.name())).bold())?;
    if let Some(ref description) = platform.manifest.platform.description {
        writeln!(out, "  {description}")?;
    }

    let heading = format!("Enforced imports ({}):", output.ordered_imports().len());
    writeln!(out, "\n{}", style(heading).bold())?;
    for coord in output.ordered_imports() {
        writeln!(out, "  {coord}")?;
    }

    let heading = format!("Constraints ({}):", output.constraints().len());
    writeln!(out, "\n{}", style(heading).bold())?;
    for coord in output.constraints() {
        writeln!(out, "  {coord}")?;
    }

    let catalog = output.catalog();
    let heading = format!("Catalog ({} groups):", catalog.len());
    writeln!(out, "\n{}", style(heading).bold())?;
    let width = catalog.iter().map(|(g, _)| g.len()).max().unwrap_or(0);
    for (group, version) in catalog.iter() {
        writeln!(out, "  {group:<width$} = {version}")?;
    }
    Ok(out)
}
