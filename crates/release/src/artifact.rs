//! Release binaries expected in the dist directory.
//!
//! This module handles:
//! - The fixed table of platform targets and their asset names
//! - SHA256 checksum computation
//! - The per-asset digest map for a dist directory

use crate::error::{Error, Result};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Name of the released binary; asset names are prefixed with it.
pub const BINARY_NAME: &str = "ccw";

/// Read size used when streaming a file through the hasher.
const CHUNK_SIZE: usize = 8192;

/// Platform targets a release ships binaries for.
///
/// The set is part of the formula contract and cannot be extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    /// macOS ARM64 (Apple Silicon)
    DarwinArm64,
    /// macOS `x86_64`
    DarwinAmd64,
    /// Linux ARM64/aarch64
    LinuxArm64,
    /// Linux `x86_64`
    LinuxAmd64,
}

impl Target {
    /// Returns the OS string used in asset names.
    #[must_use]
    pub const fn os(&self) -> &'static str {
        match self {
            Self::DarwinArm64 | Self::DarwinAmd64 => "darwin",
            Self::LinuxArm64 | Self::LinuxAmd64 => "linux",
        }
    }

    /// Returns the architecture string used in asset names.
    #[must_use]
    pub const fn arch(&self) -> &'static str {
        match self {
            Self::DarwinArm64 | Self::LinuxArm64 => "arm64",
            Self::DarwinAmd64 | Self::LinuxAmd64 => "amd64",
        }
    }

    /// Returns the short identifier (e.g., "darwin-arm64").
    #[must_use]
    pub const fn short_id(&self) -> &'static str {
        match self {
            Self::DarwinArm64 => "darwin-arm64",
            Self::DarwinAmd64 => "darwin-amd64",
            Self::LinuxArm64 => "linux-arm64",
            Self::LinuxAmd64 => "linux-amd64",
        }
    }

    /// Returns the file name of this target's binary in the dist directory.
    #[must_use]
    pub const fn asset_name(&self) -> &'static str {
        match self {
            Self::DarwinArm64 => "ccw-darwin-arm64",
            Self::DarwinAmd64 => "ccw-darwin-amd64",
            Self::LinuxArm64 => "ccw-linux-arm64",
            Self::LinuxAmd64 => "ccw-linux-amd64",
        }
    }

    /// Returns all targets, in the order they are checked and hashed.
    #[must_use]
    pub const fn all() -> &'static [Self; 4] {
        &[
            Self::DarwinArm64,
            Self::DarwinAmd64,
            Self::LinuxArm64,
            Self::LinuxAmd64,
        ]
    }

    const fn index(self) -> usize {
        match self {
            Self::DarwinArm64 => 0,
            Self::DarwinAmd64 => 1,
            Self::LinuxArm64 => 2,
            Self::LinuxAmd64 => 3,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_id())
    }
}

/// Lowercase hex SHA256 digest of every expected asset.
///
/// Always complete: one entry per [`Target`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDigests {
    digests: [String; 4],
}

impl AssetDigests {
    /// Builds the map by calling `f` once per target, in [`Target::all`] order.
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(Target) -> String) -> Self {
        let targets = Target::all();
        Self {
            digests: std::array::from_fn(|i| f(targets[i])),
        }
    }

    /// Hashes every expected asset in `dist_dir`.
    ///
    /// Files other than the expected asset names are ignored. Nothing is
    /// returned unless all four assets were found and hashed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAsset`] naming the first absent asset, or
    /// [`Error::Io`] if an asset cannot be read.
    pub fn compute(dist_dir: &Path) -> Result<Self> {
        let mut digests: [String; 4] = Default::default();
        for target in Target::all() {
            let path = dist_dir.join(target.asset_name());
            if !path.exists() {
                return Err(Error::missing_asset(path));
            }
            let sha256 = compute_sha256(&path)?;
            debug!(platform = %target, path = %path.display(), %sha256, "Hashed release asset");
            digests[target.index()] = sha256;
        }
        Ok(Self { digests })
    }

    /// Returns the digest for `target`.
    #[must_use]
    pub fn get(&self, target: Target) -> &str {
        &self.digests[target.index()]
    }

    /// Iterates over `(target, digest)` pairs in [`Target::all`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Target, &str)> {
        Target::all()
            .iter()
            .map(move |&target| (target, self.get(target)))
    }
}

/// Computes the SHA256 checksum of a file as lowercase hex.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn compute_sha256(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| Error::io(e, path, "open"))?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| Error::io(e, path, "read"))?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}
