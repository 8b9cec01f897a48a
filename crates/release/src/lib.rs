//! Release primitives for publishing ccw binaries.
//!
//! This crate covers the release-side inputs of the Homebrew tap update:
//!
//! - [`tag`] - Release tag validation and version extraction
//! - [`artifact`] - The fixed set of platform binaries and their SHA256 digests
//! - [`error`] - Error taxonomy shared by the tap tooling
//!
//! # Example
//!
//! ```rust,ignore
//! use ccw_release::{AssetDigests, ReleaseTag, Target};
//! use std::path::Path;
//!
//! let tag = ReleaseTag::parse("v0.1.21")?;
//! let digests = AssetDigests::compute(Path::new("dist"))?;
//! println!("{} {}", tag.version(), digests.get(Target::LinuxAmd64));
//! ```

pub mod artifact;
pub mod error;
pub mod tag;

pub use artifact::{AssetDigests, BINARY_NAME, Target, compute_sha256};
pub use error::{Error, Result};
pub use tag::{ReleaseTag, TAG_PREFIX};
