//! Recipe metadata extraction and resolution.
//!
//! A recipe may start with a YAML block between two `---` marker lines:
//!
//! ```text
//! ---
//! title: Apfelkuchen
//! cover: img/apfelkuchen.jpg
//! portions: 8
//! time:
//!   prep: 30 min
//!   cook: 45 min
//! difficulty: leicht
//! date: 2024-05
//! ---
//! # Apfelkuchen
//! ...
//! ```
//!
//! Every key is optional and unknown keys are ignored. A file without the
//! block is perfectly valid and simply has no metadata. A block that is not
//! valid YAML, however, is an error: there is no safe way to guess what the
//! author meant, and an index that silently mis-files a recipe is worse than
//! a failed run.
//!
//! ## Resolution priority
//!
//! - **Title**: `title` field → filename slug (`apfelkuchen.de.md` → "apfelkuchen")
//! - **Date**: `date` field (`YYYY-MM-DD`, `YYYY-MM` or `YYYY`) → file modification time
//!
//! Values are arbitrary YAML scalars (`portions: 4` and `portions: "4-6"` are
//! both fine); [`scalar_text`] turns them into display text.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_yaml::Value;

/// Parsed metadata block. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecipeMeta {
    pub title: Option<Value>,
    pub cover: Option<Value>,
    pub portions: Option<Value>,
    /// Nested `prep` / `cook` durations.
    pub time: Option<Value>,
    pub difficulty: Option<Value>,
    pub date: Option<Value>,
}

impl RecipeMeta {
    /// Title text, if present and non-empty.
    pub fn title(&self) -> Option<String> {
        self.title.as_ref().and_then(scalar_text)
    }

    /// A sub-field of `time` (`prep`, `cook`) as text. A `time` value that is
    /// not a mapping has no sub-fields.
    pub fn time_field(&self, key: &str) -> Option<String> {
        self.time
            .as_ref()?
            .as_mapping()?
            .get(key)
            .and_then(scalar_text)
    }

    /// The `date` field parsed with [`parse_date`]. `None` when absent or
    /// unrecognized.
    pub fn date(&self) -> Option<NaiveDateTime> {
        self.date
            .as_ref()
            .and_then(scalar_text)
            .and_then(|s| parse_date(&s))
    }
}

/// Split a document into its metadata block and body.
///
/// The first line must be a `---` marker (trailing whitespace allowed); the
/// block runs until the next `---` line. Returns `None` when the document
/// does not open with a marker or the block is never closed.
pub fn split_frontmatter(text: &str) -> Option<(&str, &str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let first_end = text.find('\n')?;
    if !is_marker(&text[..first_end]) {
        return None;
    }

    let block_start = first_end + 1;
    let mut pos = block_start;
    loop {
        let line_end = text[pos..].find('\n').map(|i| pos + i);
        let line = &text[pos..line_end.unwrap_or(text.len())];
        if is_marker(line) {
            let body = line_end.map(|end| &text[end + 1..]).unwrap_or("");
            return Some((&text[block_start..pos], body));
        }
        match line_end {
            Some(end) => pos = end + 1,
            None => return None,
        }
    }
}

fn is_marker(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Parse a metadata block. An empty block yields empty metadata; a block
/// that is not a YAML mapping is an error.
pub fn parse_metadata(yaml: &str) -> Result<RecipeMeta, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(RecipeMeta::default());
    }
    let value: Value = serde_yaml::from_str(yaml)?;
    if value.is_null() {
        return Ok(RecipeMeta::default());
    }
    serde_yaml::from_value(value)
}

/// Extract and parse the leading metadata block of a document.
///
/// No block means empty metadata, never an error.
pub fn read_metadata(text: &str) -> Result<RecipeMeta, serde_yaml::Error> {
    match split_frontmatter(text) {
        Some((yaml, _body)) => parse_metadata(yaml),
        None => Ok(RecipeMeta::default()),
    }
}

/// Render a scalar metadata value as display text.
///
/// Strings are trimmed, numbers and booleans use their display form. Null,
/// empty strings, sequences and mappings count as absent.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Resolve a field from multiple sources.
///
/// Takes optional values in priority order and returns the first non-empty
/// one, trimmed.
///
/// ```text
/// title: resolve(&[meta_title, filename_slug])
/// ```
pub fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}

/// Parse a flexible date: `YYYY-MM-DD`, then `YYYY-MM` (first of the month),
/// then `YYYY` (January 1st), all at midnight.
///
/// Total: anything else is `None`, never an error.
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let s = text.trim();
    if !s.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("{s}-01-01"), "%Y-%m-%d"))
        .ok()?;
    date.and_hms_opt(0, 0, 0)
}
