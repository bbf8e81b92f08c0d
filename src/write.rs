//! Index file output.
//!
//! Stage 4 of the index pipeline. Every rendered index is first written to
//! a temporary file next to its destination, and every index about to be
//! replaced is copied aside. Only then are the staged files renamed into
//! place. A failure while staging leaves every existing
//! `index.<lang>.<ext>` untouched; a failed rename puts the already swapped
//! indexes back from their copies (and removes ones that did not exist).
//!
//! Rollback is best effort: if restoring itself fails, the rename error is
//! still the one reported.

use crate::naming;
use crate::types::RenderedIndex;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempPath};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Destination of a language's index: `<dir>/index.<lang>.<ext>`.
pub fn index_path(dir: &Path, lang: &str, extension: &str) -> PathBuf {
    dir.join(naming::index_file_name(lang, extension))
}

/// Write all indexes, replacing any previous content.
pub fn write_all(indexes: &[RenderedIndex]) -> Result<(), WriteError> {
    let mut staged = Vec::with_capacity(indexes.len());
    for index in indexes {
        staged.push((stage(index)?, back_up(&index.path)?, &index.path));
    }

    let mut swapped = Vec::with_capacity(staged.len());
    for (file, backup, path) in staged {
        if let Err(e) = file.persist(path) {
            roll_back(swapped);
            return Err(WriteError::Write {
                path: path.clone(),
                source: e.error,
            });
        }
        swapped.push((backup, path));
    }
    Ok(())
}

/// Copy an existing index aside so a failed swap can restore it.
fn back_up(path: &Path) -> Result<Option<TempPath>, WriteError> {
    if !path.is_file() {
        return Ok(None);
    }
    let err = |source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = path.parent().unwrap_or(Path::new("."));
    let backup = NamedTempFile::new_in(dir).map_err(err)?.into_temp_path();
    fs::copy(path, &backup).map_err(err)?;
    Ok(Some(backup))
}

/// Undo renames that already happened: restore copies, remove new files.
fn roll_back(swapped: Vec<(Option<TempPath>, &PathBuf)>) {
    for (backup, path) in swapped {
        let _ = match backup {
            Some(backup) => backup.persist(path).map_err(|e| e.error),
            None => fs::remove_file(path),
        };
    }
}

/// Write an index to a temp file in its destination directory.
fn stage(index: &RenderedIndex) -> Result<NamedTempFile, WriteError> {
    let err = |source| WriteError::Write {
        path: index.path.clone(),
        source,
    };
    let dir = index.path.parent().unwrap_or(Path::new("."));

    let mut file = NamedTempFile::new_in(dir).map_err(err)?;
    file.write_all(index.content.as_bytes()).map_err(err)?;
    file.as_file().sync_all().map_err(err)?;
    if let Some(permissions) = target_permissions(&index.path) {
        file.as_file().set_permissions(permissions).map_err(err)?;
    }
    Ok(file)
}

/// Temp files are created owner-only; the index keeps the mode of the file
/// it replaces, or gets the usual world-readable mode when new.
fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
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
