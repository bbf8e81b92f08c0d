//! # Recipe Index
//!
//! Generates localized index pages for a directory of markdown recipes.
//! The directory is the data source: each recipe's language comes from its
//! filename, everything else from an optional YAML metadata block.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! ```text
//! 1. Scan     rezepte/*.md   →  Vec<Document>      (files → resolved metadata)
//! 2. Catalog  documents      →  LanguageCatalog    (group by language, sort)
//! 3. Render   catalog        →  Vec<RenderedIndex> (markdown per language)
//! 4. Write    indexes        →  index.<lang>.md    (staged, then swapped in)
//! ```
//!
//! Stages 2 and 3 are pure functions, so ordering and markup are unit-tested
//! without touching the filesystem. All fatal errors happen in stage 1, so a
//! broken recipe aborts the run before any index is replaced.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: reads recipe files, resolves language, title, date, link |
//! | [`catalog`] | Stage 2: groups items by language, card or glossary ordering |
//! | [`render`] | Stage 3: card-grid and A–Z glossary markdown |
//! | [`write`] | Stage 4: all-or-nothing index file replacement |
//! | [`generate`] | Runs the stages in order |
//! | [`config`] | Optional `config.toml`: languages, articles, localized page text |
//! | [`metadata`] | Frontmatter extraction, scalar values, flexible dates |
//! | [`naming`] | `<slug>.<lang>.<ext>` filename convention, language-neutral links |
//! | [`fold`] | Accent folding, article stripping, glossary letters and sort keys |
//! | [`types`] | Shared types (`Document`, `IndexItem`, `GroupLetter`, ...) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Fail Loudly
//!
//! An index that silently drops a recipe looks complete to every reader. So
//! an unreadable file or a malformed metadata block fails the whole run with
//! the offending path, and no index is written. Optional fields are the
//! opposite: a missing cover, facet, or date never fails anything.
//!
//! ## Language-Neutral Links
//!
//! `apfelkuchen.de.md` is linked as `apfelkuchen.md` from every index. The
//! site's i18n layer maps that to the reader's language, so the German and
//! English indexes can share links.
//!
//! ## Deterministic Output
//!
//! Both orderings end in a unique tie-break (the link), and accent folding is
//! an explicit table instead of locale-dependent collation. Rerunning on the
//! same files gives byte-identical indexes. The one exception is a recipe
//! without a usable `date`, which is dated by its modification time.

pub mod catalog;
pub mod config;
pub mod fold;
pub mod generate;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;
pub mod types;
pub mod write;

#[cfg(test)]
pub(crate) mod test_helpers;
