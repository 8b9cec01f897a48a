//! Homebrew tap updater for ccw releases.
//!
//! Rewrites the tap formula so it points at a new release: the tag is
//! validated, each platform binary in the dist directory is hashed, and the
//! rendered formula replaces the file at the given path.
//!
//! Nothing is written unless the tag is valid and all four binaries were
//! hashed.

pub mod cli;
pub mod tracing;

use ccw_homebrew::{FormulaData, FormulaGenerator, write_formula};
use ccw_release::{AssetDigests, ReleaseTag, Result};
use std::path::Path;

/// Renders the formula for `tag` from the binaries in `dist_dir`.
///
/// # Errors
///
/// Returns an error if the tag is invalid, an asset is missing, or an asset
/// cannot be read.
pub fn render_formula(tag: &str, dist_dir: &Path) -> Result<String> {
    let tag = ReleaseTag::parse(tag)?;
    let digests = AssetDigests::compute(dist_dir)?;
    let data = FormulaData::for_release(tag.version(), digests);
    Ok(FormulaGenerator::generate(&data))
}

/// Renders the formula for `tag` and writes it to `formula_path`.
///
/// # Errors
///
/// Returns any error from [`render_formula`] or from writing the file.
pub fn update_tap(tag: &str, dist_dir: &Path, formula_path: &Path) -> Result<()> {
    let formula = render_formula(tag, dist_dir)?;
    write_formula(formula_path, &formula)?;
    ::tracing::info!(
        tag,
        formula = %formula_path.display(),
        "Updated Homebrew formula"
    );
    Ok(())
}
