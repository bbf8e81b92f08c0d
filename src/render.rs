//! Index page rendering.
//!
//! Stage 3 of the index pipeline. Turns one language's ordered items into a
//! markdown page for the site generator (MkDocs Material: the card grid uses
//! its `grid cards` container).
//!
//! ## Card grid
//!
//! ```text
//! # Rezepte
//!
//! Wähle ein Gericht aus oder nutze die Suche.
//!
//! <div class="grid cards" markdown>
//!
//! - ![](img/apfelkuchen.jpg)
//!   **Apfelkuchen**
//!   **Portionen:** 8 · **Vorbereitung:** 30 min
//!   [:arrow_right: Zum Rezept](apfelkuchen.md)
//!
//! </div>
//! ```
//!
//! Each card line except the last ends in two spaces (a markdown hard
//! break). The facet line is left out when a recipe has no facets.
//!
//! ## Glossary
//!
//! ```text
//! # Rezepte von A bis Z
//!
//! Alle Rezepte alphabetisch sortiert.
//!
//! ## A
//!
//! - [Ärger](aerger.md)
//! - [Apfelkuchen](apfelkuchen.md)
//!
//! ## \#
//!
//! - [123 Suppe](123-suppe.md)
//! ```
//!
//! The catch-all heading is written as `\#`: a bare `## #` is an empty
//! heading with a closing sequence. Titles are escaped the same way, so
//! `Pasta [vegan]` stays literal text inside a link or bold span.
//!
//! Renderers are pure: same items in, same bytes out.

use crate::config::UiText;
use crate::types::{IndexItem, IndexVariant};

/// Separator between facets on a card.
const FACET_SEPARATOR: &str = " · ";

/// Characters that start or end inline markup (or close a heading).
const MARKDOWN_SPECIALS: &[char] = &['\\', '`', '*', '_', '[', ']', '#'];

/// Backslash-escape inline markup so `text` renders literally.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_SPECIALS.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Render one language's index page.
pub fn render(variant: IndexVariant, ui: &UiText, items: &[IndexItem]) -> String {
    match variant {
        IndexVariant::Cards => render_cards(ui, items),
        IndexVariant::Glossary => render_glossary(ui, items),
    }
}

/// Card grid: heading, subtitle, one card per item inside the grid container.
pub fn render_cards(ui: &UiText, items: &[IndexItem]) -> String {
    let mut blocks = vec![
        format!("# {}\n", ui.title),
        format!("{}\n", ui.subtitle),
        "<div class=\"grid cards\" markdown>\n".to_string(),
    ];
    for item in items {
        blocks.push(render_card(ui, item));
        blocks.push(String::new());
    }
    blocks.push("</div>\n".to_string());
    blocks.join("\n")
}

fn render_card(ui: &UiText, item: &IndexItem) -> String {
    let cover = match &item.cover {
        Some(cover) => format!("![]({cover})"),
        None => ui.no_cover.clone(),
    };

    let mut card = format!("- {cover}  \n  **{}**  \n", escape_markdown(&item.title));
    let facets = facet_line(ui, item);
    if !facets.is_empty() {
        card.push_str(&format!("  {facets}  \n"));
    }
    card.push_str(&format!("  [{}]({})", ui.open, item.link));
    card
}

/// `**Label:** value` pairs for the facets the recipe has, in fixed order.
fn facet_line(ui: &UiText, item: &IndexItem) -> String {
    let labels = &ui.facets;
    [
        (&labels.servings, &item.portions),
        (&labels.prep, &item.prep),
        (&labels.cook, &item.cook),
        (&labels.level, &item.difficulty),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.as_ref().map(|v| format!("**{label}:** {v}")))
    .collect::<Vec<_>>()
    .join(FACET_SEPARATOR)
}

/// Alphabetical listing: one `##` section per non-empty group, in the order
/// the items arrive (already sorted by group). No items renders only the
/// heading and the "no entries" placeholder.
pub fn render_glossary(ui: &UiText, items: &[IndexItem]) -> String {
    let mut blocks = vec![format!("# {}\n", ui.glossary_title)];
    if items.is_empty() {
        blocks.push(format!("{}\n", ui.empty));
        return blocks.join("\n");
    }

    blocks.push(format!("{}\n", ui.glossary_subtitle));
    for group in items.chunk_by(|a, b| a.group == b.group) {
        let label = escape_markdown(&group[0].group.to_string());
        blocks.push(format!("## {label}\n"));
        for item in group {
            blocks.push(format!("- [{}]({})", escape_markdown(&item.title), item.link));
        }
        blocks.push(String::new());
    }
    blocks.join("\n")
}
