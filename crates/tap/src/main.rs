//! update-tap CLI
//!
//! `update-tap <tag> <dist_dir> <formula_path>` rewrites the ccw Homebrew
//! formula for a release. Exits 0 on success, 2 on an invalid tag and 1 on a
//! missing binary or I/O failure.

use ccw_tap::cli::{self, CliError, EXIT_OK, exit_code_for, render_error};
use ccw_tap::tracing::{TracingConfig, init_tracing};

fn main() {
    let cli = cli::parse();

    // Ignore error if tracing already initialized
    let _ = init_tracing(TracingConfig::from_env());

    let exit_code = match ccw_tap::update_tap(&cli.tag, &cli.dist_dir, &cli.formula_path) {
        Ok(()) => EXIT_OK,
        Err(err) => {
            let err = CliError::from(err);
            render_error(&err);
            exit_code_for(&err)
        }
    };
    std::process::exit(exit_code);
}
