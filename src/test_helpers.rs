//! Shared test utilities.
//!
//! Builds throwaway recipe directories, pins file modification times so
//! date fallbacks are deterministic, and looks documents up by name.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = recipes_dir(&[("apfelkuchen.de.md", "---\ntitle: Apfelkuchen\n---\n")]);
//! set_mtime(&tmp.path().join("apfelkuchen.de.md"), fixed_time(1_700_000_000));
//! let docs = scan(tmp.path(), &IndexConfig::default()).unwrap();
//! assert_eq!(find_doc(&docs, "apfelkuchen.de.md").title, "Apfelkuchen");
//! ```

use chrono::{DateTime, Local, NaiveDateTime};
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tempfile::TempDir;

use crate::types::Document;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp directory holding the given `(file name, content)` pairs.
pub fn recipes_dir(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(tmp.path().join(name), content).unwrap();
    }
    tmp
}

/// A fixed point in time, `secs` after the Unix epoch.
pub fn fixed_time(secs: u64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs(secs)
}

/// Pin a file's modification time.
pub fn set_mtime(path: &Path, time: SystemTime) {
    fs::File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(time)
        .unwrap();
}

/// The local wall-clock reading the scanner derives from a modification time.
pub fn local_naive(time: SystemTime) -> NaiveDateTime {
    DateTime::<Local>::from(time).naive_local()
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a scanned document by file name. Panics if not found.
pub fn find_doc<'a>(docs: &'a [Document], file_name: &str) -> &'a Document {
    docs.iter()
        .find(|d| d.file_name == file_name)
        .unwrap_or_else(|| {
            let names = file_names(docs);
            panic!("document '{file_name}' not found. Available: {names:?}")
        })
}

/// All scanned file names, in scan order.
pub fn file_names(docs: &[Document]) -> Vec<&str> {
    docs.iter().map(|d| d.file_name.as_str()).collect()
}
