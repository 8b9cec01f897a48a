//! Homebrew tap output for ccw releases.
//!
//! This crate renders the `ccw` formula for a release and writes it into a
//! tap checkout.
//!
//! # Features
//!
//! - Formula generation from a version and per-platform digests
//! - Per-OS blocks with an install-time ARM/Intel branch (macOS, Linux)
//! - Replace-in-place writes that never leave a partial formula
//!
//! # Example
//!
//! ```rust,ignore
//! use ccw_homebrew::{FormulaData, FormulaGenerator, write_formula};
//! use ccw_release::AssetDigests;
//! use std::path::Path;
//!
//! let digests = AssetDigests::compute(Path::new("dist"))?;
//! let data = FormulaData::for_release("0.1.21", digests);
//! write_formula(Path::new("Formula/ccw.rb"), &FormulaGenerator::generate(&data))?;
//! ```

mod formula;
mod writer;

pub use formula::{
    BinaryInfo, DESCRIPTION, FormulaData, FormulaGenerator, HEAD_BRANCH, LICENSE, OWNER, REPO,
    download_base_url, homepage,
};
pub use writer::write_formula;
