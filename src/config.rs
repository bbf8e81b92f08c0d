//! Index configuration.
//!
//! Handles loading, validating, and merging an optional `config.toml` placed
//! in the recipes directory. Stock defaults cover the common setup (German
//! and English recipes, markdown files, card-grid index), so most sites never
//! need the file at all.
//!
//! ## Config File Location
//!
//! ```text
//! docs/
//! └── rezepte/
//!     ├── config.toml              # Optional, overrides stock defaults
//!     ├── apfelkuchen.de.md
//!     ├── apple-pie.en.md
//!     ├── index.de.md              # Generated
//!     └── index.en.md              # Generated
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Tables merge key-by-key, everything else replaces
//! the stock value:
//!
//! ```toml
//! variant = "glossary"
//!
//! [ui.en]
//! # every key of a UI table must be present when a new language is added,
//! # but existing languages can override a single string
//! subtitle = "Everything we cook, newest first."
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::IndexVariant;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

/// Name of the optional config file inside the recipes directory.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Index configuration loaded from `config.toml`.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Language tags an index is generated for, in output order.
    pub languages: Vec<String>,
    /// Language assigned to documents without a recognized language suffix.
    pub default_language: String,
    /// Extension of source documents and generated indexes, without the dot.
    pub extension: String,
    /// Which flavor of index to render.
    pub variant: IndexVariant,
    /// Leading words ignored when filing glossary entries, per language.
    pub articles: BTreeMap<String, Vec<String>>,
    /// Localized page text, per language.
    pub ui: BTreeMap<String, UiText>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        let mut articles = BTreeMap::new();
        articles.insert(
            "de".to_string(),
            ["der", "die", "das", "ein", "eine"].map(String::from).to_vec(),
        );
        articles.insert(
            "en".to_string(),
            ["the", "a", "an"].map(String::from).to_vec(),
        );

        let mut ui = BTreeMap::new();
        ui.insert("de".to_string(), UiText::default_de());
        ui.insert("en".to_string(), UiText::default_en());

        Self {
            languages: vec!["de".to_string(), "en".to_string()],
            default_language: "de".to_string(),
            extension: "md".to_string(),
            variant: IndexVariant::Cards,
            articles,
            ui,
        }
    }
}

impl IndexConfig {
    /// Validate that the language setup is self-consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.languages.is_empty() {
            return Err(ConfigError::Validation(
                "languages must not be empty".into(),
            ));
        }
        for lang in &self.languages {
            if lang.is_empty()
                || !lang
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            {
                return Err(ConfigError::Validation(format!(
                    "language tag '{lang}' must be lowercase ASCII letters or digits"
                )));
            }
            if !self.ui.contains_key(lang) {
                return Err(ConfigError::Validation(format!(
                    "missing [ui.{lang}] table for configured language '{lang}'"
                )));
            }
        }
        if !self.languages.contains(&self.default_language) {
            return Err(ConfigError::Validation(format!(
                "default_language '{}' is not listed in languages",
                self.default_language
            )));
        }
        if self.extension.is_empty() || self.extension.contains('.') {
            return Err(ConfigError::Validation(
                "extension must be non-empty and must not contain dots".into(),
            ));
        }
        Ok(())
    }

    /// UI text for a configured language.
    ///
    /// Validation guarantees an entry for every configured language; the
    /// default language's table is the fallback for anything else.
    pub fn ui_for(&self, lang: &str) -> &UiText {
        self.ui
            .get(lang)
            .or_else(|| self.ui.get(&self.default_language))
            .unwrap_or(&*FALLBACK_UI)
    }

    /// Leading articles for a language. Empty when none are configured.
    pub fn articles_for(&self, lang: &str) -> &[String] {
        self.articles.get(lang).map(Vec::as_slice).unwrap_or(&[])
    }
}

static FALLBACK_UI: LazyLock<UiText> = LazyLock::new(UiText::default_en);

/// Localized strings for one language's index page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiText {
    /// Card-grid page heading.
    pub title: String,
    /// Card-grid line under the heading.
    pub subtitle: String,
    /// Call-to-action link text on each card.
    pub open: String,
    /// Shown instead of a cover image.
    pub no_cover: String,
    /// Glossary placeholder when the language has no recipes.
    pub empty: String,
    /// Glossary page heading.
    pub glossary_title: String,
    /// Glossary line under the heading.
    pub glossary_subtitle: String,
    /// Labels of the facet line on each card.
    pub facets: FacetLabels,
}

/// Labels for the optional per-card facets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FacetLabels {
    pub servings: String,
    pub prep: String,
    pub cook: String,
    pub level: String,
}

impl UiText {
    pub fn default_de() -> Self {
        Self {
            title: "Rezepte".to_string(),
            subtitle: "Wähle ein Gericht aus oder nutze die Suche.".to_string(),
            open: ":arrow_right: Zum Rezept".to_string(),
            no_cover: "Kein Bild".to_string(),
            empty: "Noch keine Rezepte vorhanden.".to_string(),
            glossary_title: "Rezepte von A bis Z".to_string(),
            glossary_subtitle: "Alle Rezepte alphabetisch sortiert.".to_string(),
            facets: FacetLabels {
                servings: "Portionen".to_string(),
                prep: "Vorbereitung".to_string(),
                cook: "Kochen".to_string(),
                level: "Level".to_string(),
            },
        }
    }

    pub fn default_en() -> Self {
        Self {
            title: "Recipes".to_string(),
            subtitle: "Pick a dish or use search.".to_string(),
            open: ":arrow_right: Open recipe".to_string(),
            no_cover: "No image".to_string(),
            empty: "No recipes yet.".to_string(),
            glossary_title: "Recipes A to Z".to_string(),
            glossary_subtitle: "All recipes in alphabetical order.".to_string(),
            facets: FacetLabels {
                servings: "Servings".to_string(),
                prep: "Prep".to_string(),
                cook: "Cook".to_string(),
                level: "Level".to_string(),
            },
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(IndexConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if there is no config file.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<IndexConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: IndexConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the recipes directory, on top of the
/// stock defaults.
pub fn load_config(dir: &Path) -> Result<IndexConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Recipe Index Configuration
# ==========================
# Place this file as config.toml in the recipes directory.
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Language tags to generate an index for, in output order.
# Source files are named <slug>.<lang>.<extension>.
languages = ["de", "en"]

# Language assigned to files without a recognized language suffix.
default_language = "de"

# Extension of recipe files and generated indexes (no dot).
extension = "md"

# "cards"    -> card grid, newest first
# "glossary" -> alphabetical A-Z listing
variant = "cards"

# ---------------------------------------------------------------------------
# Leading articles ignored when filing glossary entries ("The Eagle" -> E)
# ---------------------------------------------------------------------------
[articles]
de = ["der", "die", "das", "ein", "eine"]
en = ["the", "a", "an"]

# ---------------------------------------------------------------------------
# Page text - German
# ---------------------------------------------------------------------------
[ui.de]
title = "Rezepte"
subtitle = "Wähle ein Gericht aus oder nutze die Suche."
open = ":arrow_right: Zum Rezept"
no_cover = "Kein Bild"
empty = "Noch keine Rezepte vorhanden."
glossary_title = "Rezepte von A bis Z"
glossary_subtitle = "Alle Rezepte alphabetisch sortiert."

[ui.de.facets]
servings = "Portionen"
prep = "Vorbereitung"
cook = "Kochen"
level = "Level"

# ---------------------------------------------------------------------------
# Page text - English
# ---------------------------------------------------------------------------
[ui.en]
title = "Recipes"
subtitle = "Pick a dish or use search."
open = ":arrow_right: Open recipe"
no_cover = "No image"
empty = "No recipes yet."
glossary_title = "Recipes A to Z"
glossary_subtitle = "All recipes in alphabetical order."

[ui.en.facets]
servings = "Servings"
prep = "Prep"
cook = "Cook"
level = "Level"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_two_languages() {
        let config = IndexConfig::default();
        assert_eq!(config.languages, vec!["de", "en"]);
        assert_eq!(config.default_language, "de");
        assert_eq!(config.extension, "md");
        assert_eq!(config.variant, IndexVariant::Cards);
    }

    #[test]
    fn default_config_passes_validation() {
        assert!(IndexConfig::default().validate().is_ok());
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.languages, vec!["de", "en"]);
        assert_eq!(config.ui_for("en").title, "Recipes");
    }

    #[test]
    fn load_config_reads_partial_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
variant = "glossary"

[ui.en]
subtitle = "Newest first."
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.variant, IndexVariant::Glossary);
        assert_eq!(config.ui_for("en").subtitle, "Newest first.");
        // Untouched keys of the same table survive the merge
        assert_eq!(config.ui_for("en").title, "Recipes");
        assert_eq!(config.ui_for("de").title, "Rezepte");
    }

    #[test]
    fn arrays_replace_instead_of_merging() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
[articles]
en = ["the"]
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.articles_for("en"), ["the".to_string()]);
        assert_eq!(config.articles_for("de").len(), 5);
    }

    #[test]
    fn invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "languages = [").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "langauges = [\"de\"]").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_ui_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[ui.de]\nheadline = \"x\"").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_variant_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "variant = \"table\"").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn new_language_without_ui_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "languages = [\"de\", \"en\", \"fr\"]",
        )
        .unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn default_language_must_be_listed() {
        let mut config = IndexConfig::default();
        config.default_language = "fr".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn empty_languages_rejected() {
        let mut config = IndexConfig::default();
        config.languages.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn uppercase_language_tag_rejected() {
        let mut config = IndexConfig::default();
        config.languages = vec!["DE".to_string()];
        config.default_language = "DE".to_string();
        config.ui.insert("DE".to_string(), UiText::default_de());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn dotted_extension_rejected() {
        let mut config = IndexConfig::default();
        config.extension = ".md".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn articles_for_unknown_language_is_empty() {
        let config = IndexConfig::default();
        assert!(config.articles_for("fr").is_empty());
    }

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"].as_integer(), Some(1));
        assert_eq!(merged["b"].as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str("[ui.de.facets]\nprep = \"a\"\ncook = \"b\"").unwrap();
        let overlay: toml::Value = toml::from_str("[ui.de.facets]\ncook = \"c\"").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["ui"]["de"]["facets"]["prep"].as_str(), Some("a"));
        assert_eq!(merged["ui"]["de"]["facets"]["cook"].as_str(), Some("c"));
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let parsed: IndexConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = IndexConfig::default();
        assert_eq!(parsed.languages, defaults.languages);
        assert_eq!(parsed.default_language, defaults.default_language);
        assert_eq!(parsed.extension, defaults.extension);
        assert_eq!(parsed.variant, defaults.variant);
        assert_eq!(parsed.articles, defaults.articles);
        assert_eq!(
            toml::Value::try_from(&parsed.ui).unwrap(),
            toml::Value::try_from(&defaults.ui).unwrap()
        );
    }

    #[test]
    fn stock_defaults_value_is_table() {
        let value = stock_defaults_value();
        assert!(value.is_table());
        assert!(value.get("ui").and_then(|v| v.get("de")).is_some());
    }
}
