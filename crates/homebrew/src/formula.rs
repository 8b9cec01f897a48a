//! Homebrew formula generation.
//!
//! Generates the Ruby formula for the ccw tap from a release version and the
//! digests of its binaries.

use ccw_release::{AssetDigests, BINARY_NAME, Target};
use std::fmt::Write as _;

/// GitHub owner of the ccw repository.
pub const OWNER: &str = "justanotheratom";
/// GitHub repository name.
pub const REPO: &str = "ccw";
/// Formula description.
pub const DESCRIPTION: &str = "Claude Code Workspace manager";
/// License identifier.
pub const LICENSE: &str = "MIT";
/// Branch installed by `brew install --HEAD`.
pub const HEAD_BRANCH: &str = "main";

/// Returns the project homepage.
#[must_use]
pub fn homepage() -> String {
    format!("https://github.com/{OWNER}/{REPO}")
}

/// Returns the release download URL prefix for `version`, with trailing slash.
#[must_use]
pub fn download_base_url(version: &str) -> String {
    format!("https://github.com/{OWNER}/{REPO}/releases/download/v{version}/")
}

/// Binary information for a platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryInfo {
    /// Download URL
    pub url: String,
    /// SHA256 checksum
    pub sha256: String,
}

/// Data for generating the Homebrew formula.
#[derive(Debug, Clone)]
pub struct FormulaData {
    /// Formula class name (e.g., "Ccw")
    pub class_name: String,
    /// Description
    pub desc: String,
    /// Homepage URL
    pub homepage: String,
    /// Version, without the tag marker
    pub version: String,
    /// License identifier
    pub license: String,
    /// Git URL used for head installs
    pub head_url: String,
    /// Branch used for head installs
    pub head_branch: String,
    /// Prefix every asset name is appended to
    pub download_base_url: String,
    /// Digest of every release binary
    pub digests: AssetDigests,
}

impl FormulaData {
    /// Creates formula data for a ccw release.
    #[must_use]
    pub fn for_release(version: &str, digests: AssetDigests) -> Self {
        // Convert binary name to class name (capitalize first letter)
        let class_name = BINARY_NAME
            .chars()
            .enumerate()
            .map(|(i, c)| if i == 0 { c.to_ascii_uppercase() } else { c })
            .collect();

        Self {
            class_name,
            desc: DESCRIPTION.to_string(),
            homepage: homepage(),
            version: version.to_string(),
            license: LICENSE.to_string(),
            head_url: format!("{}.git", homepage()),
            head_branch: HEAD_BRANCH.to_string(),
            download_base_url: download_base_url(version),
            digests,
        }
    }

    /// Returns the download URL and checksum for a target.
    #[must_use]
    pub fn binary(&self, target: Target) -> BinaryInfo {
        BinaryInfo {
            url: format!("{}{}", self.download_base_url, target.asset_name()),
            sha256: self.digests.get(target).to_string(),
        }
    }
}

/// Homebrew formula generator.
pub struct FormulaGenerator;

impl FormulaGenerator {
    /// Generates a Ruby formula from the data.
    ///
    /// Both CPU branches are emitted for each OS; Homebrew picks one on the
    /// installing machine.
    #[must_use]
    pub fn generate(data: &FormulaData) -> String {
        let mut formula = format!(
            r#"class {} < Formula
  desc "{}"
  homepage "{}"
  version "{}"
"#,
            data.class_name, data.desc, data.homepage, data.version
        );

        Self::push_os_block(
            &mut formula,
            data,
            "on_macos",
            Target::DarwinArm64,
            Target::DarwinAmd64,
        );
        Self::push_os_block(
            &mut formula,
            data,
            "on_linux",
            Target::LinuxArm64,
            Target::LinuxAmd64,
        );

        let _ = write!(
            formula,
            r#"
  license "{}"
  head "{}", branch: "{}"

  def install
    bin.install Dir["{BINARY_NAME}*"].first => "{BINARY_NAME}"
  end
end
"#,
            data.license, data.head_url, data.head_branch
        );

        formula
    }

    fn push_os_block(
        formula: &mut String,
        data: &FormulaData,
        block: &str,
        arm: Target,
        intel: Target,
    ) {
        let arm = data.binary(arm);
        let intel = data.binary(intel);
        let _ = write!(
            formula,
            r#"
  {block} do
    if Hardware::CPU.arm?
      url "{}"
      sha256 "{}"
    else
      url "{}"
      sha256 "{}"
    end
  end
"#,
            arm.url, arm.sha256, intel.url, intel.sha256
        );
    }
}
