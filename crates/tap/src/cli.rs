//! Command-line surface of `update-tap`.
//!
//! Parses the three positional release inputs and maps failures to exit
//! codes and rendered diagnostics.

use clap::Parser;
use miette::{Diagnostic, Report};
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application
pub const EXIT_OK: i32 = 0;
/// Missing release asset or I/O failure exit code
pub const EXIT_FAILURE: i32 = 1;
/// Invalid argument exit code (matches clap's usage errors)
pub const EXIT_CLI: i32 = 2;

/// Rewrite the ccw Homebrew formula for a new release.
#[derive(Parser, Debug)]
#[command(name = "update-tap")]
#[command(about = "Update the Homebrew tap formula with a release's version and checksums")]
#[command(long_about = None)]
pub struct Cli {
    /// Release tag, e.g. v0.1.21
    pub tag: String,

    /// Directory containing the ccw release binaries (ccw-darwin-amd64, etc.)
    pub dist_dir: PathBuf,

    /// Path of the tap formula file to overwrite
    pub formula_path: PathBuf,
}

/// CLI-specific error types with proper exit code mapping
#[derive(Error, Debug, Clone, Diagnostic)]
pub enum CliError {
    /// Invalid argument (exit code 2)
    #[error("{message}")]
    #[diagnostic(code(ccw::tap::argument))]
    Config {
        /// The error message
        message: String,
        /// Optional help text
        #[help]
        help: Option<String>,
    },
    /// Expected release binary not found (exit code 1)
    #[error("{message}")]
    #[diagnostic(code(ccw::tap::missing_asset))]
    Asset {
        /// The error message
        message: String,
        /// Optional help text
        #[help]
        help: Option<String>,
    },
    /// Filesystem failure (exit code 1)
    #[error("{message}")]
    #[diagnostic(code(ccw::tap::io))]
    Io {
        /// The error message
        message: String,
        /// Optional help text
        #[help]
        help: Option<String>,
    },
}

/// Convert `ccw_release::Error` to the matching `CliError` variant.
impl From<ccw_release::Error> for CliError {
    fn from(err: ccw_release::Error) -> Self {
        let help = miette::Diagnostic::help(&err).map(|h| h.to_string());
        let message = err.to_string();
        match err {
            ccw_release::Error::InvalidTag { .. } => Self::Config { message, help },
            ccw_release::Error::MissingAsset { .. } => Self::Asset { message, help },
            ccw_release::Error::Io { .. } => Self::Io { message, help },
        }
    }
}

/// Map CLI error to appropriate exit code
#[must_use]
pub const fn exit_code_for(err: &CliError) -> i32 {
    match err {
        CliError::Config { .. } => EXIT_CLI,
        CliError::Asset { .. } | CliError::Io { .. } => EXIT_FAILURE,
    }
}

/// Render an error to stderr using miette
#[allow(clippy::print_stderr)]
pub fn render_error(err: &CliError) {
    let report = Report::new(err.clone());
    eprintln!("{report:?}");
    // Ensure output is flushed before process exit
    let _ = io::stderr().flush();
}

/// Parse command line arguments
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
