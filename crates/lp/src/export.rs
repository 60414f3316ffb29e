use std::{
    fs::{self, File, Permissions},
    io::{self, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use triad_core::Model;

use crate::{ExportError, LpTerm, write_lp};

/// Writes `model` in the LP text format to `path`.
///
/// If `path` is an existing directory, the file is written as
/// `<model name>.lp` inside it. An existing file at the target is replaced
/// and keeps its permissions; a new file gets `0o644` on Unix. A symlink is
/// written through to the file it points at.
///
/// Output goes to a temporary file next to the target and is renamed over it
/// only after every write has succeeded, so a failed export never leaves a
/// truncated file behind. The rename gives the file a new inode, so its
/// owner is the exporting user.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns [`ExportError::Invalid`] if the model fails [`Model::validate`],
/// [`ExportError::Io`] if writing fails, and [`ExportError::Persist`] if the
/// finished file cannot be moved into place.
#[tracing::instrument(skip_all, fields(model = %model.name))]
pub fn export<T: LpTerm>(model: &Model<T>, path: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    model.validate()?;

    let path = path.as_ref();
    let target = if path.is_dir() {
        path.join(format!("{}.lp", model.name))
    } else {
        path.to_path_buf()
    };

    let io_err = |source| ExportError::Io {
        path: target.clone(),
        source,
    };

    let destination = if target.is_symlink() {
        fs::canonicalize(&target).map_err(io_err)?
    } else {
        target.clone()
    };
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(io_err)?;
    {
        let mut out = BufWriter::new(file.as_file_mut());
        write_lp(model, &mut out).map_err(io_err)?;
        out.flush().map_err(io_err)?;
    }

    let permissions = target_permissions(&destination, file.as_file()).map_err(io_err)?;
    file.as_file().set_permissions(permissions).map_err(io_err)?;

    file.persist(&destination).map_err(|err| ExportError::Persist {
        path: target.clone(),
        source: err.error,
    })?;

    tracing::debug!(path = %target.display(), "exported model");
    Ok(target)
}

/// Returns the permissions of the file at `path`, or those of a freshly
/// created file if there is none yet.
fn target_permissions(path: &Path, temp: &File) -> io::Result<Permissions> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.permissions()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => new_file_permissions(temp),
        Err(err) => Err(err),
    }
}

// Temporary files are created owner-only.
#[cfg(unix)]
#[allow(clippy::unnecessary_wraps)]
fn new_file_permissions(_temp: &File) -> io::Result<Permissions> {
    use std::os::unix::fs::PermissionsExt;

    Ok(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions(temp: &File) -> io::Result<Permissions> {
    Ok(temp.metadata()?.permissions())
}
