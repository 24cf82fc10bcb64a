//! Danish ordering for street names.
//!
//! Strings are compared level by level, the way a Danish collator does:
//!
//! 1. Primary: base letters. `æ`, `ø` and `å` follow `z`, in that order,
//!    and the digraph `aa` sorts as `å`. Whitespace sorts before
//!    punctuation, punctuation before digits, digits before letters.
//! 2. Secondary: accents (`e` < `é`, `æ` < `ä`, `ø` < `ö`, `y` < `ü`).
//! 3. Tertiary: case, uppercase first; `å` before the `aa` spelling.
//!
//! Strings equal on every level fall back to code point order, so the
//! ordering is total and deterministic.

use std::cmp::Ordering;

const WHITESPACE_BASE: u32 = 0x0100;
const SYMBOL_BASE: u32 = 0x0200;
const DIGIT_BASE: u32 = 0x0020_0000;
const LETTER_BASE: u32 = 0x0030_0000;
/// Letters with no Danish position sort after `å`, by code point.
const FOREIGN_LETTER_BASE: u32 = LETTER_BASE + 0x100;

/// Precomputed sort key. Field order is comparison order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<u32>,
    secondary: Vec<u8>,
    tertiary: Vec<u8>,
    raw: String,
}

/// Builds the sort key for `s`.
#[must_use]
pub fn collation_key(s: &str) -> CollationKey {
    let mut key = CollationKey {
        primary: Vec::with_capacity(s.len()),
        secondary: Vec::with_capacity(s.len()),
        tertiary: Vec::with_capacity(s.len()),
        raw: s.to_string(),
    };

    let chars: Vec<char> = s.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let case = case_weight(c);
        let lower = to_lower(c);

        // `aa` is the old spelling of `å` and collates with it.
        if lower == 'a' && chars.get(i + 1).is_some_and(|next| to_lower(*next) == 'a') {
            key.primary.push(letter_weight('å'));
            key.secondary.push(0);
            key.tertiary.push(case + 2);
            i += 2;
            continue;
        }

        for (primary, secondary) in char_weights(lower) {
            key.primary.push(primary);
            key.secondary.push(secondary);
            key.tertiary.push(case);
        }
        i += 1;
    }

    key
}

/// Compares two strings in Danish order.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Uppercase sorts first.
fn case_weight(c: char) -> u8 {
    u8::from(!c.is_uppercase())
}

fn to_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Primary position of a Danish base letter.
fn letter_weight(base: char) -> u32 {
    match base {
        'a'..='z' => LETTER_BASE + (u32::from(base) - u32::from('a')),
        'æ' => LETTER_BASE + 26,
        'ø' => LETTER_BASE + 27,
        'å' => LETTER_BASE + 28,
        other => FOREIGN_LETTER_BASE + u32::from(other),
    }
}

/// Primary and secondary weights for a lowercase character. Most
/// characters yield one element; `ß` expands to two.
fn char_weights(c: char) -> Vec<(u32, u8)> {
    if c == 'ß' {
        return vec![(letter_weight('s'), 1), (letter_weight('s'), 1)];
    }
    if c.is_whitespace() {
        return vec![(WHITESPACE_BASE, 0)];
    }
    if let Some(d) = c.to_digit(10) {
        return vec![(DIGIT_BASE + d, 0)];
    }
    if c.is_alphabetic() {
        let (base, accent) = fold_accent(c);
        return vec![(letter_weight(base), accent)];
    }
    vec![(SYMBOL_BASE + u32::from(c), 0)]
}

/// Maps an accented letter to its Danish base letter and accent rank.
fn fold_accent(c: char) -> (char, u8) {
    match c {
        'á' => ('a', 1),
        'à' => ('a', 2),
        'â' => ('a', 3),
        'ã' => ('a', 4),
        'ā' => ('a', 5),
        'ä' => ('æ', 1),
        'ç' | 'č' => ('c', 1),
        'ð' | 'đ' => ('d', 1),
        'é' => ('e', 1),
        'è' => ('e', 2),
        'ê' => ('e', 3),
        'ë' => ('e', 4),
        'í' => ('i', 1),
        'ì' => ('i', 2),
        'î' => ('i', 3),
        'ï' => ('i', 4),
        'ñ' => ('n', 1),
        'ó' => ('o', 1),
        'ò' => ('o', 2),
        'ô' => ('o', 3),
        'õ' => ('o', 4),
        'ö' => ('ø', 1),
        'ő' => ('ø', 2),
        'š' => ('s', 1),
        'ú' => ('u', 1),
        'ù' => ('u', 2),
        'û' => ('u', 3),
        'ü' => ('y', 1),
        'ű' => ('y', 2),
        'ý' => ('y', 3),
        'ÿ' => ('y', 4),
        'ž' => ('z', 1),
        other => (other, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut names: Vec<&str>) -> Vec<&str> {
        names.sort_by(|a, b| compare(a, b));
        names
    }

    #[test]
    fn danish_letters_follow_z() {
        assert_eq!(
            sorted(vec![
                "Østerbrogade",
                "Ålborgvej",
                "Amager Boulevard",
                "Ærøgade",
                "Zinnsgade",
            ]),
            vec![
                "Amager Boulevard",
                "Zinnsgade",
                "Ærøgade",
                "Østerbrogade",
                "Ålborgvej",
            ]
        );
    }

    #[test]
    fn aa_sorts_as_aa_ring() {
        assert_eq!(
            sorted(vec!["Ålborgvej", "Aabenraavej", "Abel Cathrines Gade"]),
            vec!["Abel Cathrines Gade", "Aabenraavej", "Ålborgvej"]
        );
        assert_eq!(compare("Åvej", "Aavej"), Ordering::Less);
    }

    #[test]
    fn space_sorts_before_letters() {
        assert_eq!(
            compare("Amager Boulevard", "Amagerbrogade"),
            Ordering::Less
        );
    }

    #[test]
    fn digits_sort_before_letters() {
        assert_eq!(compare("10. Februar Vej", "Abel Cathrines Gade"), Ordering::Less);
    }

    #[test]
    fn accents_are_secondary() {
        assert_eq!(compare("Rene", "René"), Ordering::Less);
        assert_eq!(compare("René", "Renf"), Ordering::Less);
        assert_eq!(compare("Ärlig", "Ærlig"), Ordering::Greater);
    }

    #[test]
    fn uppercase_sorts_first() {
        assert_eq!(compare("Vej", "vej"), Ordering::Less);
        assert_eq!(compare("vej", "Vejen"), Ordering::Less);
    }

    #[test]
    fn equal_strings_compare_equal() {
        assert_eq!(compare("Main St", "Main St"), Ordering::Equal);
        assert_eq!(compare("Main St", "Side St"), Ordering::Less);
    }
}
