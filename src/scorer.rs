//! String Similarity Scoring
//!
//! Pluggable scorer used by the approximate matching pass. The default
//! implementation is a weighted-ratio combination on top of strsim,
//! robust to token order and partial overlap.

use std::collections::BTreeSet;
use strsim::normalized_levenshtein;

/// Scale applied to the token-based strategies
const TOKEN_SCALE: f64 = 0.95;
/// Scale applied to the best-window partial strategy
const PARTIAL_SCALE: f64 = 0.90;

/// A string-similarity measure in the [0, 100] range.
///
/// Implementations must return 100 for identical inputs and stay within
/// bounds; symmetry is not required.
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, a: &str, b: &str) -> f64;
}

/// Weighted-ratio scorer: the best of plain, token-sort, token-set and
/// partial Levenshtein ratios, with the looser strategies discounted
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedRatio;

impl SimilarityScorer for WeightedRatio {
    fn score(&self, a: &str, b: &str) -> f64 {
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        if a == b {
            return 100.0;
        }
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let plain = normalized_levenshtein(&a, &b);
        let token_sort = token_sort_ratio(&a, &b) * TOKEN_SCALE;
        let token_set = token_set_ratio(&a, &b) * TOKEN_SCALE;
        let partial = partial_ratio(&a, &b) * PARTIAL_SCALE;

        100.0 * plain.max(token_sort).max(token_set).max(partial)
    }
}

/// Compare with tokens sorted, neutralizing word order
fn token_sort_ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(&sorted_tokens(a), &sorted_tokens(b))
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Compare intersection and remainder token strings, neutralizing
/// tokens present on only one side
fn token_set_ratio(a: &str, b: &str) -> f64 {
    let set_a: BTreeSet<&str> = a.split_whitespace().collect();
    let set_b: BTreeSet<&str> = b.split_whitespace().collect();
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }

    let common: Vec<&str> = set_a.intersection(&set_b).copied().collect();
    let only_a: Vec<&str> = set_a.difference(&set_b).copied().collect();
    let only_b: Vec<&str> = set_b.difference(&set_a).copied().collect();

    let base = common.join(" ");
    let combined_a = join_parts(&base, &only_a.join(" "));
    let combined_b = join_parts(&base, &only_b.join(" "));

    normalized_levenshtein(&base, &combined_a)
        .max(normalized_levenshtein(&base, &combined_b))
        .max(normalized_levenshtein(&combined_a, &combined_b))
}

fn join_parts(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (true, _) => right.to_string(),
        (_, true) => left.to_string(),
        _ => format!("{} {}", left, right),
    }
}

/// Best alignment of the shorter string against same-length windows of
/// the longer one
fn partial_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (short, long) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };
    if short.is_empty() {
        return 0.0;
    }

    let short_str: String = short.iter().collect();
    let mut best: f64 = 0.0;
    for start in 0..=(long.len() - short.len()) {
        let window: String = long[start..start + short.len()].iter().collect();
        best = best.max(normalized_levenshtein(&short_str, &window));
        if best >= 1.0 {
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_100() {
        let scorer = WeightedRatio;
        assert_eq!(scorer.score("Банановое суфле", "Банановое суфле"), 100.0);
        assert_eq!(scorer.score("Мята", "мята"), 100.0);
        assert_eq!(scorer.score("", ""), 100.0);
    }

    #[test]
    fn test_empty_vs_nonempty_is_0() {
        let scorer = WeightedRatio;
        assert_eq!(scorer.score("", "мята"), 0.0);
        assert_eq!(scorer.score("мята", ""), 0.0);
    }

    #[test]
    fn test_word_order_insensitive() {
        let scorer = WeightedRatio;
        let score = scorer.score("суфле банановое", "банановое суфле");
        assert!(score >= 90.0, "score was {}", score);
    }

    #[test]
    fn test_token_subset_scores_high() {
        let scorer = WeightedRatio;
        let score = scorer.score("360 банановое суфле", "Банановое суфле");
        assert!(score >= 90.0, "score was {}", score);
    }

    #[test]
    fn test_substring_scores_high() {
        let scorer = WeightedRatio;
        let score = scorer.score("персик", "спелый персик");
        assert!(score >= 85.0, "score was {}", score);
    }

    #[test]
    fn test_dissimilar_scores_low() {
        let scorer = WeightedRatio;
        let score = scorer.score("шоколад", "вишня");
        assert!(score < 40.0, "score was {}", score);
    }

    #[test]
    fn test_bounded() {
        let scorer = WeightedRatio;
        for (a, b) in [
            ("мята", "мята перечная"),
            ("a", "b"),
            ("виноград", "град"),
            ("", "x"),
        ] {
            let score = scorer.score(a, b);
            assert!((0.0..=100.0).contains(&score), "{} vs {} -> {}", a, b, score);
        }
    }
}
