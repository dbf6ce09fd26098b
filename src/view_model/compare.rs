//! Field comparison used by the table sort.
//!
//! Text is compared the way a user-facing locale collation orders words:
//! first on base letters, ignoring case and accents (punctuation and spaces
//! before digits before letters), then unaccented before accented, then
//! lowercase before uppercase, then by code point so that the order is total.
//!
//! Accent folding covers combining marks and the precomposed Latin-1 and
//! Latin Extended-A letters; other scripts compare by their lowercase form.

use crate::model::{FieldValue, LogRecord, SortDirection, SortField, SortSpec};
use std::cmp::Ordering;

/// Compare two strings in collation order.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    base_chars(a)
        .map(collation_key)
        .cmp(base_chars(b).map(collation_key))
        .then_with(|| accent_ranks(a).cmp(&accent_ranks(b)))
        .then_with(|| case_tiebreak(a, b))
        .then_with(|| a.cmp(b))
}

/// Compare two records on one field in natural (ascending) order.
///
/// Durations compare numerically, so `-0.0` and `0.0` are equal. NaN never
/// reaches here (`LogRecord::new` rejects it). Mismatched value kinds cannot
/// occur for a fixed field; they compare equal.
pub fn compare_field(a: &LogRecord, b: &LogRecord, field: SortField) -> Ordering {
    match (a.field_value(field), b.field_value(field)) {
        (FieldValue::Text(x), FieldValue::Text(y)) => compare_text(x, y),
        (FieldValue::Number(x), FieldValue::Number(y)) => {
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        _ => Ordering::Equal,
    }
}

/// Compare two records under a full sort spec.
pub fn compare_records(a: &LogRecord, b: &LogRecord, sort: SortSpec) -> Ordering {
    let ordering = compare_field(a, b, sort.field);
    match sort.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn collation_key(c: char) -> (u8, char) {
    let class = if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    };
    let folded = c.to_lowercase().next().unwrap_or(c);
    (class, fold_accent(folded).unwrap_or(folded))
}

fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

fn base_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().filter(|&c| !is_combining_mark(c))
}

// One rank per base character: 1 when it carries an accent.
fn accent_ranks(s: &str) -> Vec<u8> {
    let mut ranks = Vec::new();
    for c in s.chars() {
        if is_combining_mark(c) {
            if let Some(last) = ranks.last_mut() {
                *last = 1;
            }
            continue;
        }
        let lower = c.to_lowercase().next().unwrap_or(c);
        ranks.push(u8::from(fold_accent(lower).is_some()));
    }
    ranks
}

/// Base letter of an accented lowercase Latin letter.
fn fold_accent(c: char) -> Option<char> {
    let base = match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è'..='ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì'..='ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' => 's',
        'ţ' | 'ť' | 'ŧ' => 't',
        'ù'..='ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        _ => return None,
    };
    Some(base)
}

// Lowercase ranks first at the first position where the case differs.
fn case_tiebreak(a: &str, b: &str) -> Ordering {
    let rank = |c: char| u8::from(!c.is_lowercase());
    a.chars().map(rank).cmp(b.chars().map(rank))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_is_ignored_at_first_level() {
        assert_eq!(compare_text("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_text("Deploy", "build"), Ordering::Greater);
    }

    #[test]
    fn lowercase_sorts_before_uppercase_on_tie() {
        assert_eq!(compare_text("build", "Build"), Ordering::Less);
        assert_eq!(compare_text("Build", "build"), Ordering::Greater);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(compare_text("check", "check --estimate-gas"), Ordering::Less);
        assert_eq!(compare_text("", "a"), Ordering::Less);
    }

    #[test]
    fn punctuation_before_digits_before_letters() {
        assert_eq!(compare_text("-x", "1"), Ordering::Less);
        assert_eq!(compare_text("1", "a"), Ordering::Less);
        assert_eq!(compare_text("export-abi", "exporta"), Ordering::Less);
    }

    #[test]
    fn accented_letters_sort_next_to_their_base_letter() {
        assert_eq!(compare_text("éclair", "fudge"), Ordering::Less);
        assert_eq!(compare_text("éclair", "dune"), Ordering::Greater);
        assert_eq!(compare_text("Ångström", "bar"), Ordering::Less);
    }

    #[test]
    fn unaccented_sorts_before_accented_on_tie() {
        assert_eq!(compare_text("e", "é"), Ordering::Less);
        assert_eq!(compare_text("resume", "résumé"), Ordering::Less);
        // Accent differences outrank case differences
        assert_eq!(compare_text("é", "E"), Ordering::Greater);
    }

    #[test]
    fn combining_marks_fold_like_precomposed_letters() {
        let decomposed = "e\u{0301}clair";
        assert_eq!(compare_text(decomposed, "fudge"), Ordering::Less);
        assert_eq!(compare_text("eclair", decomposed), Ordering::Less);
    }

    #[test]
    fn equal_strings_compare_equal() {
        assert_eq!(compare_text("deploy", "deploy"), Ordering::Equal);
    }

    #[test]
    fn text_comparison_is_antisymmetric() {
        let words = ["a", "A", "b", "B", "a1", "A1", "-", "", "é", "E", "É", "e\u{0301}"];
        for x in words {
            for y in words {
                assert_eq!(compare_text(x, y), compare_text(y, x).reverse(), "{x:?} vs {y:?}");
            }
        }
    }
}
