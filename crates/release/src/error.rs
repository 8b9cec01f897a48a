//! Error types for release formula operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for release operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing a release formula.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The release tag does not start with the version marker.
    #[error("Invalid tag '{tag}': tag must start with 'v' (e.g. v0.1.21)")]
    #[diagnostic(
        code(ccw::release::invalid_tag),
        help("Pass the git tag of the release, including the leading 'v'")
    )]
    InvalidTag {
        /// The rejected tag
        tag: String,
    },

    /// An expected release binary is absent from the dist directory.
    #[error("missing release asset: {}", path.display())]
    #[diagnostic(
        code(ccw::release::missing_asset),
        help("Build all four platform binaries into the dist directory before updating the tap")
    )]
    MissingAsset {
        /// The path that was checked
        path: PathBuf,
    },

    /// Filesystem operation failed.
    #[error("I/O {operation} failed on {}: {source}", path.display())]
    #[diagnostic(
        code(ccw::release::io),
        help("Check file permissions and available disk space")
    )]
    Io {
        /// The underlying OS error
        #[source]
        source: std::io::Error,
        /// The path the operation was applied to
        path: PathBuf,
        /// The operation that failed
        operation: String,
    },
}

impl Error {
    /// Create a new invalid tag error.
    #[must_use]
    pub fn invalid_tag(tag: impl Into<String>) -> Self {
        Self::InvalidTag { tag: tag.into() }
    }

    /// Create a new missing asset error.
    #[must_use]
    pub fn missing_asset(path: impl Into<PathBuf>) -> Self {
        Self::MissingAsset { path: path.into() }
    }

    /// Create a new I/O error for `operation` on `path`.
    #[must_use]
    pub fn io(
        source: std::io::Error,
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
    ) -> Self {
        Self::Io {
            source,
            path: path.into(),
            operation: operation.into(),
        }
    }
}
