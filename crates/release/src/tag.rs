//! Release tag parsing.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Marker every release tag starts with.
pub const TAG_PREFIX: char = 'v';

/// A validated release tag such as `v0.1.21`.
///
/// Only the leading marker is checked; the remainder is carried as-is and is
/// not required to be a valid semantic version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseTag {
    raw: String,
    version: String,
}

impl ReleaseTag {
    /// Parses a tag, stripping every leading [`TAG_PREFIX`] (`vv1.0` is `1.0`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTag`] if the tag does not start with the marker.
    pub fn parse(tag: &str) -> Result<Self> {
        if !tag.starts_with(TAG_PREFIX) {
            return Err(Error::invalid_tag(tag));
        }
        Ok(Self {
            raw: tag.to_string(),
            version: tag.trim_start_matches(TAG_PREFIX).to_string(),
        })
    }

    /// Returns the version with the marker stripped (e.g. `0.1.21`).
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ReleaseTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
