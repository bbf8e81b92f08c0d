//! Title folding for the glossary index.
//!
//! Two tables, two jobs:
//!
//! - [`fold_letter`] maps one character to one base letter. It decides the
//!   section a title is filed under, so it must land on exactly one of the
//!   27 buckets (A–Z and `#`): `Ä` → `A`, `ß` → `S`.
//! - [`fold_sort_key`] builds the comparison key inside a section. It expands
//!   umlauts and ligatures to digraphs (`ä` → `ae`, `ß` → `ss`) so distinct
//!   words keep distinct keys, following German dictionary order.
//!
//! Both are explicit tables over Latin-1 and Latin Extended-A. Nothing here
//! depends on the platform locale, so output is identical everywhere.

use crate::types::GroupLetter;

/// Fold a single character to its unaccented base letter.
///
/// Case is preserved for ASCII results (`É` → `E`, `é` → `e`), except `ß`
/// which has no uppercase base and folds to `s`. Characters outside the
/// table are returned unchanged.
pub fn fold_letter(c: char) -> char {
    match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' | 'Æ' => 'A',
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' | 'æ' => 'a',
        'Ç' | 'Ć' | 'Ĉ' | 'Ċ' | 'Č' => 'C',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'Ð' | 'Ď' | 'Đ' => 'D',
        'ð' | 'ď' | 'đ' => 'd',
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'Ĝ' | 'Ğ' | 'Ġ' | 'Ģ' => 'G',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'Ĥ' | 'Ħ' => 'H',
        'ĥ' | 'ħ' => 'h',
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ĩ' | 'Ī' | 'Ĭ' | 'Į' | 'İ' => 'I',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'Ĵ' => 'J',
        'ĵ' => 'j',
        'Ķ' => 'K',
        'ķ' => 'k',
        'Ĺ' | 'Ļ' | 'Ľ' | 'Ŀ' | 'Ł' => 'L',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'Ñ' | 'Ń' | 'Ņ' | 'Ň' => 'N',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ŏ' | 'Ő' | 'Œ' => 'O',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' | 'œ' => 'o',
        'Ŕ' | 'Ŗ' | 'Ř' => 'R',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'Ś' | 'Ŝ' | 'Ş' | 'Š' | 'ẞ' => 'S',
        'ś' | 'ŝ' | 'ş' | 'š' | 'ß' => 's',
        'Ţ' | 'Ť' | 'Ŧ' | 'Þ' => 'T',
        'ţ' | 'ť' | 'ŧ' | 'þ' => 't',
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => 'U',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'Ŵ' => 'W',
        'ŵ' => 'w',
        'Ý' | 'Ÿ' | 'Ŷ' => 'Y',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'Ź' | 'Ż' | 'Ž' => 'Z',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

/// Digraph expansions used by the sort key, on lowercase input.
fn sort_digraph(c: char) -> Option<&'static str> {
    match c {
        'ä' | 'æ' => Some("ae"),
        'ö' | 'œ' => Some("oe"),
        'ü' => Some("ue"),
        'ß' => Some("ss"),
        _ => None,
    }
}

/// Build a lowercase comparison key with digraph expansion.
///
/// `"Ärger"` → `"aerger"`, `"Straße"` → `"strasse"`, `"Crème"` → `"creme"`.
pub fn fold_sort_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s.chars().flat_map(char::to_lowercase) {
        match sort_digraph(c) {
            Some(digraph) => key.push_str(digraph),
            None => key.push(fold_letter(c)),
        }
    }
    key
}

/// Drop a leading article ("The Eagle" → "Eagle").
///
/// The first word is compared case-insensitively against `articles` and must
/// be followed by a space. A title that would become empty is kept as is.
pub fn strip_article<'a>(title: &'a str, articles: &[String]) -> &'a str {
    let title = title.trim();
    let Some((first, rest)) = title.split_once(' ') else {
        return title;
    };
    let first = first.to_lowercase();
    let rest = rest.trim_start();
    if !rest.is_empty() && articles.iter().any(|a| a.to_lowercase() == first) {
        rest
    } else {
        title
    }
}

/// Glossary section for a title: first letter after article stripping,
/// folded and uppercased. Anything that is not A–Z files under
/// [`GroupLetter::Symbol`].
pub fn group_letter(title: &str, articles: &[String]) -> GroupLetter {
    let Some(first) = strip_article(title, articles).chars().next() else {
        return GroupLetter::Symbol;
    };
    let letter = fold_letter(first).to_ascii_uppercase();
    if letter.is_ascii_uppercase() {
        GroupLetter::Letter(letter)
    } else {
        GroupLetter::Symbol
    }
}

/// Comparison key for a title: article-stripped, then [`fold_sort_key`].
pub fn sort_key(title: &str, articles: &[String]) -> String {
    fold_sort_key(strip_article(title, articles))
}
