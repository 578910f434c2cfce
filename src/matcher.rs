//! Fuzzy Matcher
//!
//! Orchestrates flavor extraction, the exact normalized-key pass and
//! the approximate scoring pass over a catalog snapshot.

use tracing::debug;

use crate::catalog::{CatalogEntry, CatalogSnapshot};
use crate::extractor::{extract_flavor, extract_weight, BrandSet};
use crate::normalizer::normalize;
use crate::scorer::{SimilarityScorer, WeightedRatio};

/// Minimum approximate score accepted as a match
pub const SCORE_THRESHOLD: u8 = 70;

/// Outcome of matching one raw label against the catalog
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    /// Best candidate, `None` when nothing reached the threshold
    pub entry: Option<&'a CatalogEntry>,
    /// Confidence 0-100. Reported even when the candidate was rejected
    /// as low-confidence, for diagnostics
    pub score: u8,
    /// Weight from the label itself, falling back to the entry default
    pub weight_g: Option<u32>,
}

impl MatchResult<'_> {
    pub fn is_matched(&self) -> bool {
        self.entry.is_some()
    }
}

/// Matches raw sales labels against an immutable catalog snapshot.
///
/// Built once per batch: the candidate-brand set is precomputed here
/// instead of being re-derived per label. Safe to share across threads
/// for as long as the snapshot outlives the matcher.
pub struct Matcher<'a> {
    snapshot: &'a CatalogSnapshot,
    brands: BrandSet,
    scorer: Box<dyn SimilarityScorer>,
}

impl<'a> Matcher<'a> {
    pub fn new(snapshot: &'a CatalogSnapshot) -> Self {
        Self::with_scorer(snapshot, Box::new(WeightedRatio))
    }

    /// Use a custom similarity scorer for the approximate pass
    pub fn with_scorer(snapshot: &'a CatalogSnapshot, scorer: Box<dyn SimilarityScorer>) -> Self {
        Self {
            snapshot,
            brands: BrandSet::from_entries(snapshot.entries()),
            scorer,
        }
    }

    /// Match one raw label against the snapshot.
    ///
    /// Absence of a match is a normal outcome, not an error. Ties in
    /// either pass resolve to the earliest entry in catalog order.
    pub fn match_label(&self, raw: &str) -> MatchResult<'a> {
        if self.snapshot.active().next().is_none() {
            return MatchResult {
                entry: None,
                score: 0,
                weight_g: None,
            };
        }

        let extracted = extract_flavor(raw, &self.brands);
        let query = if extracted.is_empty() {
            raw.to_string()
        } else {
            extracted
        };
        let norm_query = normalize(&query);

        // Exact pass over the cached normalized flavors
        for entry in self.snapshot.active() {
            if entry.norm_flavor == norm_query {
                debug!("🎯 exact flavor match: '{}' -> '{}'", raw, entry.canonical_sku);
                return self.matched(entry, 100, raw);
            }
        }

        // Approximate pass over the human-readable flavors; strictly
        // greater keeps the earliest entry on tied scores
        let mut best: Option<(&CatalogEntry, f64)> = None;
        for entry in self.snapshot.active() {
            let score = self.scorer.score(&query, &entry.flavor);
            if best.map_or(true, |(_, current)| score > current) {
                best = Some((entry, score));
            }
        }

        let Some((entry, score)) = best else {
            return MatchResult {
                entry: None,
                score: 0,
                weight_g: None,
            };
        };
        let score = score.round() as u8;

        if score < SCORE_THRESHOLD {
            debug!(
                "below threshold for '{}': best '{}' scored {}",
                raw, entry.flavor, score
            );
            return MatchResult {
                entry: None,
                score,
                weight_g: None,
            };
        }

        debug!(
            "🎯 fuzzy flavor match ({}): '{}' -> '{}'",
            score, raw, entry.canonical_sku
        );
        self.matched(entry, score, raw)
    }

    fn matched(&self, entry: &'a CatalogEntry, score: u8, raw: &str) -> MatchResult<'a> {
        MatchResult {
            entry: Some(entry),
            score,
            weight_g: extract_weight(raw).or(entry.default_weight_g),
        }
    }
}
