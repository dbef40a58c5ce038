//! CLI argument definitions for gavel.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "gavel",
    version,
    about = "Build and inspect dependency platform catalogs",
    long_about = "gavel reads a Platform.toml declaring enforced platform imports, \
                  dependency sets and single dependencies, and publishes the ordered imports, \
                  the version constraints and the group-to-version catalog derived from them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the platform manifest (defaults to the nearest Platform.toml)
    #[arg(long, global = true, env = "GAVEL_MANIFEST")]
    pub manifest: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print enforced imports, constraints and the version catalog
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the platform manifest
    Check {
        /// Reject dynamic versions such as 1.+ or latest.release
        #[arg(long)]
        deny_dynamic: bool,
    },

    /// Print the catalog version for a group
    Version {
        /// Group name (e.g. io.grpc)
        group: String,
    },

    /// Write the version catalog as JSON
    Export {
        /// Output file (defaults to versions.json next to the manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
