//! Raw Label Flavor Extraction
//!
//! Best-effort isolation of the flavor-bearing substring of a noisy
//! sales label, so matching compares flavor to flavor instead of whole
//! label to flavor. Also extracts weight annotations for the caller.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use std::ops::Range;

use crate::catalog::CatalogEntry;

/// Category boilerplate stripped from raw labels, most specific first
const CATEGORY_PHRASES: [&str; 2] = ["табак для кальяна -", "табак для кальяна"];

lazy_static! {
    static ref BRACKETED: Regex = Regex::new(r"\(.*?\)").unwrap();
    static ref WEIGHT: Regex = Regex::new(r"(\d+)\s*(г|гр|g)\b").unwrap();
    static ref LINE_PHRASE: Regex =
        Regex::new(r"\b(легкая линейка|крепкая линейка)\b").unwrap();
    static ref LINE_WORD: Regex = Regex::new(r"\b(легкая|крепкая)\b").unwrap();
    static ref NON_FLAVOR: Regex = Regex::new(r"[^a-zа-я0-9\s\-]+").unwrap();
}

/// Distinct candidate brands, lowercased and ordered longest-first so a
/// more specific brand ("сарма 360") wins over one that is its prefix
/// ("сарма").
///
/// Built once per batch and shared across rows instead of being
/// re-derived from the whole catalog on every call.
#[derive(Debug, Clone, Default)]
pub struct BrandSet {
    brands: Vec<String>,
}

impl BrandSet {
    /// Gather brands from active catalog entries
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a CatalogEntry>,
    {
        let distinct: BTreeSet<String> = entries
            .into_iter()
            .filter(|e| e.active && !e.brand.is_empty())
            .map(|e| e.brand.to_lowercase())
            .collect();

        let mut brands: Vec<String> = distinct.into_iter().collect();
        // Longest first; equal lengths stay alphabetical, so iteration
        // order is fully deterministic
        brands.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        Self { brands }
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    /// Byte range of the first brand occurring in `text`
    fn find_in(&self, text: &str) -> Option<Range<usize>> {
        for brand in &self.brands {
            if let Some(start) = text.find(brand.as_str()) {
                return Some(start..start + brand.len());
            }
        }
        None
    }
}

/// Strip noise from a raw sales label, leaving the likely flavor text.
///
/// May return an empty string when the label degenerates to nothing;
/// the matcher falls back to the raw label in that case.
pub fn extract_flavor(raw: &str, brands: &BrandSet) -> String {
    let mut text = raw.to_lowercase();
    text = BRACKETED.replace_all(&text, " ").into_owned();
    text = WEIGHT.replace_all(&text, " ").into_owned();

    for phrase in CATEGORY_PHRASES {
        text = text.replace(phrase, " ");
    }

    text = LINE_PHRASE.replace_all(&text, " ").into_owned();
    text = LINE_WORD.replace_all(&text, " ").into_owned();

    // The brand is assumed to precede the flavor: cut everything up to
    // and including the first (longest) brand occurrence
    if let Some(range) = brands.find_in(&text) {
        text = text[range.end..].to_string();
    }

    let cleaned = NON_FLAVOR.replace_all(&text, " ").replace('-', " ");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract a weight in grams from a raw label (`120 г`, `25гр`, `200g`)
pub fn extract_weight(raw: &str) -> Option<u32> {
    let lowered = raw.to_lowercase();
    let caps = WEIGHT.captures(&lowered)?;
    caps[1].parse().ok()
}
