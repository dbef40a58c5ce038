//! Handler for `gavel show`.

use std::path::Path;

use miette::Result;

use gavel_core::config::{GlobalConfig, OutputFormat};
use gavel_ops::ops_show::{self, ShowOptions};

pub fn exec(manifest: &Path, config: &GlobalConfig, json: bool) -> Result<()> {
    let opts = ShowOptions {
        format: json.then_some(OutputFormat::Json),
    };
    ops_show::show(manifest, config, &opts)
}
