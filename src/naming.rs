//! Filename parsing for the `<slug>.<lang>.<ext>` convention.
//!
//! Localized recipes carry their language as the segment right before the
//! extension; untagged files belong to the default language:
//!
//! - `apfelkuchen.de.md` → slug "apfelkuchen", language "de"
//! - `apple-pie.en.md` → slug "apple-pie", language "en"
//! - `suppe.md` → slug "suppe", no language
//! - `suppe.fr.md` with `fr` not configured → slug "suppe.fr", no language
//!
//! ## Language-neutral links
//!
//! Index pages link to `<slug>.<ext>` with the language removed. The site's
//! i18n layer resolves that link to the reader's language, so the German and
//! English index both point at `apfelkuchen.md`.

/// Result of parsing a document filename.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentName {
    /// Name without extension and language segment.
    pub slug: String,
    /// Recognized language tag, lowercased.
    pub language: Option<String>,
    /// Extension without the dot. Empty when the name has none.
    pub extension: String,
}

impl DocumentName {
    /// Language-neutral link target: `<slug>.<ext>`.
    pub fn link(&self) -> String {
        if self.extension.is_empty() {
            self.slug.clone()
        } else {
            format!("{}.{}", self.slug, self.extension)
        }
    }

    /// Filename of this document in another language: `<slug>.<lang>.<ext>`.
    pub fn with_language(&self, lang: &str) -> String {
        if self.extension.is_empty() {
            format!("{}.{}", self.slug, lang)
        } else {
            format!("{}.{}.{}", self.slug, lang, self.extension)
        }
    }
}

/// Parse a filename, recognizing only the given language tags
/// (case-insensitively).
pub fn parse_document_name(file_name: &str, languages: &[String]) -> DocumentName {
    let Some((stem, extension)) = file_name.rsplit_once('.').filter(|(s, _)| !s.is_empty()) else {
        return DocumentName {
            slug: file_name.to_string(),
            language: None,
            extension: String::new(),
        };
    };

    if let Some((slug, tag)) = stem.rsplit_once('.')
        && !slug.is_empty()
    {
        let tag = tag.to_lowercase();
        if languages.contains(&tag) {
            return DocumentName {
                slug: slug.to_string(),
                language: Some(tag),
                extension: extension.to_string(),
            };
        }
    }

    DocumentName {
        slug: stem.to_string(),
        language: None,
        extension: extension.to_string(),
    }
}

/// Whether `file_name` is a generated index (`index.<...>`) rather than a
/// recipe.
pub fn is_generated_index(file_name: &str) -> bool {
    file_name.starts_with(INDEX_PREFIX)
}

/// Reserved filename prefix of generated index pages.
pub const INDEX_PREFIX: &str = "index.";

/// Filename of the generated index for a language: `index.<lang>.<ext>`.
pub fn index_file_name(lang: &str, extension: &str) -> String {
    format!("{INDEX_PREFIX}{lang}.{extension}")
}
