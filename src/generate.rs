//! Pipeline orchestration: scan → catalog → render → write.
//!
//! All fatal conditions (missing directory, unreadable file, malformed
//! metadata) surface during the scan, before anything is rendered. Writing
//! happens last and stages every language before replacing any file, so a
//! run either refreshes every index or leaves all of them alone.

use crate::catalog::{self, LanguageCatalog};
use crate::config::IndexConfig;
use crate::render;
use crate::scan::{self, ScanError};
use crate::types::{Document, IndexVariant, RenderedIndex};
use crate::write::{self, WriteError};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Everything a run produced, for reporting.
#[derive(Debug)]
pub struct Generated {
    pub documents: Vec<Document>,
    pub catalog: LanguageCatalog,
    pub indexes: Vec<RenderedIndex>,
}

/// Scan the recipes directory and build the sorted per-language catalog.
pub fn collect(
    recipes_dir: &Path,
    config: &IndexConfig,
    variant: IndexVariant,
) -> Result<(Vec<Document>, LanguageCatalog), GenerateError> {
    let documents = scan::scan(recipes_dir, config)?;
    let catalog = catalog::build_catalog(&documents, config, variant);
    Ok((documents, catalog))
}

/// Render one index per configured language, in configured order.
pub fn render_all(
    recipes_dir: &Path,
    config: &IndexConfig,
    variant: IndexVariant,
    catalog: &LanguageCatalog,
) -> Vec<RenderedIndex> {
    config
        .languages
        .iter()
        .map(|lang| {
            let items = catalog.get(lang).map(Vec::as_slice).unwrap_or(&[]);
            RenderedIndex {
                language: lang.clone(),
                path: write::index_path(recipes_dir, lang, &config.extension),
                content: render::render(variant, config.ui_for(lang), items),
            }
        })
        .collect()
}

/// Run the whole pipeline and write the indexes.
pub fn generate(
    recipes_dir: &Path,
    config: &IndexConfig,
    variant: IndexVariant,
) -> Result<Generated, GenerateError> {
    let (documents, catalog) = collect(recipes_dir, config, variant)?;
    let indexes = render_all(recipes_dir, config, variant, &catalog);
    write::write_all(&indexes)?;
    Ok(Generated {
        documents,
        catalog,
        indexes,
    })
}
