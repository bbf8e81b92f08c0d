//! Recipe directory scanning.
//!
//! Stage 1 of the index pipeline. Reads every recipe in the recipes
//! directory and resolves its language, metadata, title, date, and link.
//!
//! ## Directory Structure
//!
//! ```text
//! docs/rezepte/
//! ├── config.toml            # Optional, see config module
//! ├── apfelkuchen.de.md      # German recipe
//! ├── apple-pie.en.md        # English recipe
//! ├── gulasch.md             # No language tag → default language
//! ├── .draft.de.md           # Hidden, skipped
//! ├── index.de.md            # Generated index, skipped
//! └── index.en.md            # Generated index, skipped
//! ```
//!
//! The scan is flat (no subdirectories) and processes files in sorted path
//! order.
//!
//! ## Failure Policy
//!
//! Any unreadable file or malformed metadata block aborts the scan. Skipping
//! the file instead would produce an index with a silently missing recipe,
//! which nobody notices until a reader goes looking for it. Missing optional
//! fields are never errors.

use crate::config::IndexConfig;
use crate::metadata;
use crate::naming;
use crate::types::{DateSource, Document};
use chrono::{DateTime, Local, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Recipes directory does not exist: {0}")]
    MissingDirectory(PathBuf),
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed metadata block in {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Scan the recipes directory into resolved documents, in sorted path order.
pub fn scan(dir: &Path, config: &IndexConfig) -> Result<Vec<Document>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::MissingDirectory(dir.to_path_buf()));
    }
    collect_candidates(dir, &config.extension)?
        .iter()
        .map(|path| read_document(path, config))
        .collect()
}

/// List recipe files: matching extension, not hidden, not a generated index.
fn collect_candidates(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ScanError> {
    let err = |source| ScanError::Read {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(err)? {
        let path = entry.map_err(err)?.path();
        if is_candidate(&path, extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn is_candidate(path: &Path, extension: &str) -> bool {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return false;
    };
    path.is_file()
        && !name.starts_with('.')
        && !naming::is_generated_index(&name)
        && path.extension().is_some_and(|e| e == extension)
}

/// Read one recipe and resolve its title, date, and link.
pub fn read_document(path: &Path, config: &IndexConfig) -> Result<Document, ScanError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = naming::parse_document_name(&file_name, &config.languages);
    let language = name
        .language
        .clone()
        .unwrap_or_else(|| config.default_language.clone());

    let text = fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let meta = metadata::read_metadata(&text).map_err(|source| ScanError::Metadata {
        path: path.to_path_buf(),
        source,
    })?;

    let title = metadata::resolve(&[meta.title().as_deref(), Some(&name.slug)])
        .unwrap_or_else(|| file_name.clone());

    let (date, date_source) = match meta.date() {
        Some(date) => (date, DateSource::Metadata),
        None => (modified_time(path)?, DateSource::Modified),
    };

    Ok(Document {
        path: path.to_path_buf(),
        file_name,
        language,
        meta,
        title,
        date,
        date_source,
        link: name.link(),
    })
}

/// Last-modified time of a file as local wall-clock time.
fn modified_time(path: &Path) -> Result<NaiveDateTime, ScanError> {
    let modified = fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(DateTime::<Local>::from(modified).naive_local())
}
