//! Replace-on-success file output

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::{Access, ProcessError};

/// Write `contents` to `path`, replacing any previous file only once every
/// byte has been written.
///
/// The data goes to a temporary file next to the destination which is then
/// renamed over it. On failure the temporary file is removed and an existing
/// file keeps its old content. A symlink at `path` is written through, and an
/// existing destination must be writable by the caller.
pub fn write_replacing(path: &Path, contents: &str) -> Result<(), ProcessError> {
    let to_error = |err: io::Error| ProcessError::from_io(err, path, Access::Write);

    let target = resolve_target(path).map_err(to_error)?;

    // Same check the OS would apply to an in-place open for writing
    let existing = match OpenOptions::new().write(true).open(&target) {
        Ok(file) => Some(file.metadata().map_err(to_error)?),
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => return Err(to_error(err)),
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".linecraft-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }

    let mut tmp = builder.tempfile_in(dir).map_err(to_error)?;
    tmp.write_all(contents.as_bytes()).map_err(to_error)?;
    tmp.as_file().sync_all().map_err(to_error)?;

    // Keep the mode of a file we are about to replace
    if let Some(meta) = existing {
        if let Err(err) = tmp.as_file().set_permissions(meta.permissions()) {
            debug!(path = %target.display(), error = %err, "could not copy permissions");
        }
    }

    tmp.persist(&target).map_err(|err| to_error(err.error))?;
    debug!(path = %target.display(), bytes = contents.len(), "output written");
    Ok(())
}

/// Follow symlinks at `path` to the file that should receive the data.
///
/// A dangling link resolves to its (not yet existing) destination.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(path) {
            Ok(resolved) => Ok(resolved),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let link = fs::read_link(path)?;
                Ok(match path.parent() {
                    Some(parent) if link.is_relative() => parent.join(link),
                    _ => link,
                })
            }
            Err(err) => Err(err),
        },
        _ => Ok(path.to_path_buf()),
    }
}
