//! Grouping and ordering of index items.
//!
//! Stage 2 of the index pipeline. Buckets documents by language and puts
//! each bucket in its final display order:
//!
//! | Variant  | Order |
//! |----------|-------|
//! | cards    | date (newest first) → title (case-insensitive) → link |
//! | glossary | group letter (A–Z, then `#`) → folded sort key → title (case-insensitive) → link |
//!
//! The link is unique per language, so both orders are total: the output
//! never depends on the order files came off the disk.

use crate::config::IndexConfig;
use crate::types::{Document, IndexItem, IndexVariant};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Language tag → items in display order.
///
/// Every configured language has an entry, even when it has no recipes.
pub type LanguageCatalog = BTreeMap<String, Vec<IndexItem>>;

/// Group documents by language and sort each language for `variant`.
pub fn build_catalog(
    documents: &[Document],
    config: &IndexConfig,
    variant: IndexVariant,
) -> LanguageCatalog {
    let mut catalog: LanguageCatalog = config
        .languages
        .iter()
        .map(|lang| (lang.clone(), Vec::new()))
        .collect();

    for doc in documents {
        let item = IndexItem::from_document(doc, config.articles_for(&doc.language));
        catalog.entry(doc.language.clone()).or_default().push(item);
    }

    for items in catalog.values_mut() {
        sort_items(items, variant);
    }
    catalog
}

/// Sort items in place into `variant`'s display order.
pub fn sort_items(items: &mut [IndexItem], variant: IndexVariant) {
    match variant {
        IndexVariant::Cards => items.sort_by(compare_cards),
        IndexVariant::Glossary => items.sort_by(compare_glossary),
    }
}

fn compare_cards(a: &IndexItem, b: &IndexItem) -> Ordering {
    b.date
        .cmp(&a.date)
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        .then_with(|| a.link.cmp(&b.link))
}

fn compare_glossary(a: &IndexItem, b: &IndexItem) -> Ordering {
    a.group
        .cmp(&b.group)
        .then_with(|| a.sort_key.cmp(&b.sort_key))
        .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        .then_with(|| a.link.cmp(&b.link))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::RecipeMeta;
    use crate::types::{DateSource, GroupLetter};
    use chrono::{NaiveDate, NaiveDateTime};
    use std::path::PathBuf;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn doc(lang: &str, slug: &str, title: &str, date: NaiveDateTime) -> Document {
        Document {
            path: PathBuf::from(format!("rezepte/{slug}.{lang}.md")),
            file_name: format!("{slug}.{lang}.md"),
            language: lang.to_string(),
            meta: RecipeMeta::default(),
            title: title.to_string(),
            date,
            date_source: DateSource::Metadata,
            link: format!("{slug}.md"),
        }
    }

    fn titles(items: &[IndexItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn every_language_has_a_bucket() {
        let docs = vec![doc("de", "a", "Apfel", ymd(2024, 1, 1))];
        let catalog = build_catalog(&docs, &IndexConfig::default(), IndexVariant::Cards);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog["de"].len(), 1);
        assert!(catalog["en"].is_empty());
    }

    #[test]
    fn documents_grouped_by_language() {
        let docs = vec![
            doc("de", "apfelkuchen", "Apfelkuchen", ymd(2024, 1, 1)),
            doc("en", "apple-pie", "Apple Pie", ymd(2024, 1, 1)),
            doc("de", "gulasch", "Gulasch", ymd(2024, 1, 1)),
        ];
        let catalog = build_catalog(&docs, &IndexConfig::default(), IndexVariant::Cards);
        assert_eq!(titles(&catalog["de"]), vec!["Apfelkuchen", "Gulasch"]);
        assert_eq!(titles(&catalog["en"]), vec!["Apple Pie"]);
    }

    #[test]
    fn cards_newest_first() {
        let now = ymd(2026, 1, 1);
        let docs = vec![
            doc("de", "alt", "Alt", ymd(2023, 1, 1)),
            doc("de", "neu", "Neu", ymd(2024, 5, 1)),
            doc("de", "ohne-datum", "Ohne Datum", now),
        ];
        let catalog = build_catalog(&docs, &IndexConfig::default(), IndexVariant::Cards);
        assert_eq!(titles(&catalog["de"]), vec!["Ohne Datum", "Neu", "Alt"]);
    }

    #[test]
    fn cards_same_date_by_title_case_insensitive() {
        let day = ymd(2024, 5, 1);
        let docs = vec![
            doc("de", "c", "cremesuppe", day),
            doc("de", "b", "Bohnen", day),
            doc("de", "a", "apfel", day),
        ];
        let catalog = build_catalog(&docs, &IndexConfig::default(), IndexVariant::Cards);
        assert_eq!(titles(&catalog["de"]), vec!["apfel", "Bohnen", "cremesuppe"]);
    }

    #[test]
    fn cards_order_independent_of_input_order() {
        let day = ymd(2024, 5, 1);
        let forward = vec![
            doc("de", "suppe-1", "Suppe", day),
            doc("de", "suppe-2", "Suppe", day),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        let config = IndexConfig::default();
        let a = build_catalog(&forward, &config, IndexVariant::Cards);
        let b = build_catalog(&backward, &config, IndexVariant::Cards);
        let links = |c: &LanguageCatalog| -> Vec<String> {
            c["de"].iter().map(|i| i.link.clone()).collect()
        };
        assert_eq!(links(&a), links(&b));
        assert_eq!(links(&a), vec!["suppe-1.md", "suppe-2.md"]);
    }

    #[test]
    fn glossary_by_letter_then_folded_key() {
        let day = ymd(2024, 5, 1);
        let docs = vec![
            doc("en", "soup", "123 Soup", day),
            doc("en", "eagle", "The Eagle", day),
            doc("en", "apfel", "Apfelkuchen", day),
            doc("en", "aerger", "Ärger", day),
            doc("en", "zucchini", "zucchini bread", day),
        ];
        let catalog = build_catalog(&docs, &IndexConfig::default(), IndexVariant::Glossary);
        let items = &catalog["en"];
        // "aerger" < "apfelkuchen" thanks to the digraph fold
        assert_eq!(
            titles(items),
            vec!["Ärger", "Apfelkuchen", "The Eagle", "zucchini bread", "123 Soup"]
        );
        let groups: Vec<GroupLetter> = items.iter().map(|i| i.group).collect();
        assert_eq!(
            groups,
            vec![
                GroupLetter::Letter('A'),
                GroupLetter::Letter('A'),
                GroupLetter::Letter('E'),
                GroupLetter::Letter('Z'),
                GroupLetter::Symbol,
            ]
        );
    }

    #[test]
    fn glossary_uses_language_articles() {
        let day = ymd(2024, 5, 1);
        let docs = vec![
            doc("de", "kuchen", "Der Kuchen", day),
            doc("de", "eagle", "The Eagle", day),
        ];
        let catalog = build_catalog(&docs, &IndexConfig::default(), IndexVariant::Glossary);
        // "der" is a German article; "the" is not
        let groups: Vec<GroupLetter> = catalog["de"].iter().map(|i| i.group).collect();
        assert_eq!(groups, vec![GroupLetter::Letter('K'), GroupLetter::Letter('T')]);
    }

    #[test]
    fn glossary_ignores_dates() {
        let docs = vec![
            doc("de", "b", "Birne", ymd(2025, 1, 1)),
            doc("de", "a", "Apfel", ymd(2020, 1, 1)),
        ];
        let catalog = build_catalog(&docs, &IndexConfig::default(), IndexVariant::Glossary);
        assert_eq!(titles(&catalog["de"]), vec!["Apfel", "Birne"]);
    }
}
