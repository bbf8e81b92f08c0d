//! Shared types passed between pipeline stages.
//!
//! A [`Document`] is what the scanner knows about one source file; an
//! [`IndexItem`] is the immutable subset the renderers need. Both live only
//! for the duration of one run.

use crate::fold;
use crate::metadata::{self, RecipeMeta};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Flavor of index page to generate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum IndexVariant {
    /// Card grid, newest recipe first.
    #[default]
    Cards,
    /// Alphabetical listing with one section per letter.
    Glossary,
}

/// Where a document's date came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateSource {
    /// Parsed from the `date` metadata field.
    Metadata,
    /// Fallback: the file's last-modified time.
    Modified,
}

/// A source recipe file with everything resolved.
///
/// Every document has exactly one language, title, and date, even when the
/// file carries no metadata block.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    /// File name as found on disk (`apfelkuchen.de.md`).
    pub file_name: String,
    pub language: String,
    pub meta: RecipeMeta,
    /// Metadata title, or the filename slug when absent.
    pub title: String,
    pub date: NaiveDateTime,
    pub date_source: DateSource,
    /// Language-neutral link (`apfelkuchen.md`).
    pub link: String,
}

/// Glossary bucket: a letter A–Z or the catch-all symbol group.
///
/// The derived ordering puts every letter before [`GroupLetter::Symbol`],
/// which is the section order of the glossary page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupLetter {
    /// Always an ASCII uppercase letter.
    Letter(char),
    Symbol,
}

impl GroupLetter {
    /// Section label shown in the glossary.
    pub fn label(&self) -> char {
        match self {
            GroupLetter::Letter(c) => *c,
            GroupLetter::Symbol => '#',
        }
    }
}

impl fmt::Display for GroupLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for GroupLetter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.label())
    }
}

/// What the renderers need from a document.
#[derive(Debug, Clone, Serialize)]
pub struct IndexItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    pub date: NaiveDateTime,
    pub link: String,
    /// Glossary section.
    pub group: GroupLetter,
    /// Folded title used only for ordering; never displayed.
    #[serde(skip)]
    pub sort_key: String,
}

impl IndexItem {
    /// Derive the renderable item. `articles` are the leading words of the
    /// document's language that glossary filing skips.
    pub fn from_document(doc: &Document, articles: &[String]) -> Self {
        let meta = &doc.meta;
        IndexItem {
            title: doc.title.clone(),
            cover: meta.cover.as_ref().and_then(metadata::scalar_text),
            portions: meta.portions.as_ref().and_then(metadata::scalar_text),
            prep: meta.time_field("prep"),
            cook: meta.time_field("cook"),
            difficulty: meta.difficulty.as_ref().and_then(metadata::scalar_text),
            date: doc.date,
            link: doc.link.clone(),
            group: fold::group_letter(&doc.title, articles),
            sort_key: fold::sort_key(&doc.title, articles),
        }
    }
}

/// A rendered index page and where it goes.
#[derive(Debug, Clone)]
pub struct RenderedIndex {
    pub language: String,
    pub path: PathBuf,
    pub content: String,
}
