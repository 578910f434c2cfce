//! Text Normalization
//!
//! Canonicalizes arbitrary text into the comparison key used for exact
//! flavor matching. Two strings are considered equal only when their
//! normalized forms are structurally identical.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BRACKETED: Regex = Regex::new(r"\(.*?\)").unwrap();
    static ref NON_KEY: Regex = Regex::new(r"[^a-zа-я0-9\s]+").unwrap();
}

/// Normalize text into a comparison key.
///
/// Lowercases, folds `ё` to `е`, drops bracketed descriptions, treats
/// hyphens as spaces (so "манго-лайм" equals "манго лайм"), keeps only
/// Latin/Cyrillic letters and digits, and collapses whitespace.
/// Total: any input yields a (possibly empty) key.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase().replace('ё', "е");
    let no_brackets = BRACKETED.replace_all(&lowered, " ");
    let no_hyphens = no_brackets.replace('-', " ");
    let letters_only = NON_KEY.replace_all(&no_hyphens, " ");
    letters_only.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_yo_folding() {
        assert_eq!(normalize("Ёлка"), "елка");
        assert_eq!(normalize("MANGO Лайм"), "mango лайм");
    }

    #[test]
    fn test_hyphen_equals_space() {
        assert_eq!(normalize("Манго-Лайм"), normalize("манго лайм"));
    }

    #[test]
    fn test_bracket_stripping() {
        assert_eq!(normalize("Персик (свежий)"), normalize("Персик"));
        // Non-greedy: each bracketed run goes separately
        assert_eq!(normalize("а (б) в (г) д"), "а в д");
    }

    #[test]
    fn test_punctuation_and_whitespace() {
        assert_eq!(normalize("  Чай,   №5!  "), "чай 5");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("()!?"), "");
    }

    #[test]
    fn test_idempotence() {
        for sample in [
            "Манго-Лайм",
            "Персик (свежий)",
            "  ЁЛКА!!!  ",
            "Табак для кальяна - Сарма 360",
            "",
        ] {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for '{}'", sample);
        }
    }
}
