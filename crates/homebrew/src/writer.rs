//! Writes a rendered formula into the tap checkout.

use ccw_release::{Error, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Writes `formula` to `path`, replacing any existing file.
///
/// Missing parent directories are created. The text goes to a uniquely named
/// temporary file in the destination directory and is renamed into place, so
/// `path` holds either the previous formula or the complete new one and no
/// other file is touched.
///
/// An existing formula reached through a symlink is replaced at the link's
/// target, leaving the link in place, and keeps its permission bits.
///
/// # Errors
///
/// Returns [`Error::Io`] if a directory cannot be created or the file cannot
/// be written or renamed.
pub fn write_formula(path: &Path, formula: &str) -> Result<()> {
    let target = resolve_target(path)?;
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| Error::io(e, dir, "create_dir_all"))?;

    let permissions = match fs::metadata(&target) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == ErrorKind::NotFound => default_permissions(),
        Err(e) => return Err(Error::io(e, &target, "metadata")),
    };

    // Dropping `tmp` on any early return removes the temporary file.
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(e, dir, "create"))?;
    debug!(path = %tmp.path().display(), "Writing formula to temporary file");

    tmp.write_all(formula.as_bytes())
        .map_err(|e| Error::io(e, tmp.path(), "write"))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| Error::io(e, tmp.path(), "sync"))?;
    if let Some(permissions) = permissions {
        fs::set_permissions(tmp.path(), permissions)
            .map_err(|e| Error::io(e, tmp.path(), "set_permissions"))?;
    }

    tmp.persist(&target)
        .map_err(|e| Error::io(e.error, &target, "rename"))?;

    info!(path = %target.display(), bytes = formula.len(), "Wrote formula");
    Ok(())
}

/// Follows symlinks of an existing destination; new paths are used as given.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(Error::io(e, path, "canonicalize")),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
