use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for gavel operations outside the catalog builder itself.
#[derive(Debug, Error, Diagnostic)]
pub enum GavelError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unreadable or malformed platform manifest (e.g. Platform.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Platform.toml for syntax errors"))]
    Manifest { message: String },

    /// A catalog lookup or catalog output step failed.
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// The global configuration could not be read.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.gavel/config.toml or unset GAVEL_HOME"))]
    Config { message: String },
}
