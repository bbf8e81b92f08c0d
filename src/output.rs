//! CLI output formatting.
//!
//! Each report has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout.
//!
//! # Output Format
//!
//! ## Scan (verbose)
//!
//! ```text
//! [de] + apfelkuchen.de.md -> Apfelkuchen
//! [de] + gulasch.md -> gulasch (date from mtime)
//! [en] + apple-pie.en.md -> Apple Pie
//! ```
//!
//! ## Catalog (`check`)
//!
//! ```text
//! de (2 recipes)
//!     001 2024-05-01 Apfelkuchen → apfelkuchen.md
//!     002 2023-11-02 gulasch → gulasch.md
//! en (0 recipes)
//! ```
//!
//! Glossary catalogs nest items under their letter:
//!
//! ```text
//! de (2 recipes)
//!     A
//!         001 Apfelkuchen → apfelkuchen.md
//!     G
//!         002 gulasch → gulasch.md
//! ```
//!
//! ## Write
//!
//! ```text
//! Wrote: docs/rezepte/index.de.md
//! Wrote: docs/rezepte/index.en.md
//! ```

use crate::catalog::LanguageCatalog;
use crate::types::{DateSource, Document, IndexItem, IndexVariant, RenderedIndex};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn recipe_count(n: usize) -> String {
    match n {
        1 => "1 recipe".to_string(),
        n => format!("{n} recipes"),
    }
}

/// One line per scanned document: language, file, resolved title.
pub fn format_scan_output(documents: &[Document]) -> Vec<String> {
    documents
        .iter()
        .map(|doc| {
            let mut line = format!("[{}] + {} -> {}", doc.language, doc.file_name, doc.title);
            if doc.date_source == DateSource::Modified {
                line.push_str(" (date from mtime)");
            }
            line
        })
        .collect()
}

pub fn print_scan_output(documents: &[Document]) {
    for line in format_scan_output(documents) {
        println!("{}", line);
    }
}

/// Per-language listing of the catalog in display order.
pub fn format_catalog(catalog: &LanguageCatalog, variant: IndexVariant) -> Vec<String> {
    let mut lines = Vec::new();
    for (lang, items) in catalog {
        lines.push(format!("{} ({})", lang, recipe_count(items.len())));
        match variant {
            IndexVariant::Cards => {
                for (i, item) in items.iter().enumerate() {
                    lines.push(format!(
                        "{}{} {} {}",
                        indent(1),
                        format_index(i + 1),
                        item.date.format("%Y-%m-%d"),
                        item_target(item)
                    ));
                }
            }
            IndexVariant::Glossary => {
                let mut position = 0;
                for group in items.chunk_by(|a, b| a.group == b.group) {
                    lines.push(format!("{}{}", indent(1), group[0].group));
                    for item in group {
                        position += 1;
                        lines.push(format!(
                            "{}{} {}",
                            indent(2),
                            format_index(position),
                            item_target(item)
                        ));
                    }
                }
            }
        }
    }
    lines
}

fn item_target(item: &IndexItem) -> String {
    format!("{} → {}", item.title, item.link)
}

pub fn print_catalog(catalog: &LanguageCatalog, variant: IndexVariant) {
    for line in format_catalog(catalog, variant) {
        println!("{}", line);
    }
}

/// One line per written index.
pub fn format_write_output(indexes: &[RenderedIndex]) -> Vec<String> {
    indexes
        .iter()
        .map(|index| format!("Wrote: {}", index.path.display()))
        .collect()
}

pub fn print_write_output(indexes: &[RenderedIndex]) {
    for line in format_write_output(indexes) {
        println!("{}", line);
    }
}

/// One-line run summary: `Indexed 3 recipes (de: 2, en: 1)`.
pub fn format_summary(catalog: &LanguageCatalog) -> String {
    let total: usize = catalog.values().map(Vec::len).sum();
    let per_lang: Vec<String> = catalog
        .iter()
        .map(|(lang, items)| format!("{}: {}", lang, items.len()))
        .collect();
    format!("Indexed {} ({})", recipe_count(total), per_lang.join(", "))
}
