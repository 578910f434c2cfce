//! Catalog Model and Authoring
//!
//! Curated product entries with derived canonical identifiers, the
//! immutable snapshot handed to the matcher, and bulk text import.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::error::CatalogResult;
use crate::normalizer::normalize;
use crate::parser::parse_catalog_line;
use crate::sku::{build_canonical_name, build_canonical_sku};

/// A curated product definition with derived canonical identifiers.
///
/// `canonical_sku`, `canonical_name`, `norm_brand` and `norm_flavor`
/// are pure functions of the editable fields; call
/// [`recompute_derived`](CatalogEntry::recompute_derived) after editing
/// instead of hand-writing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub category: String,
    pub brand: String,
    pub line: Option<String>,
    pub flavor: String,
    pub canonical_sku: String,
    pub canonical_name: String,
    pub default_weight_g: Option<u32>,
    pub norm_brand: String,
    pub norm_flavor: String,
    pub active: bool,
}

impl CatalogEntry {
    /// Create an active entry, computing every derived field
    pub fn new(
        category: &str,
        brand: &str,
        line: Option<&str>,
        flavor: &str,
        default_weight_g: Option<u32>,
    ) -> Self {
        let mut entry = Self {
            category: category.to_string(),
            brand: brand.to_string(),
            line: line.map(str::to_string),
            flavor: flavor.to_string(),
            canonical_sku: String::new(),
            canonical_name: String::new(),
            default_weight_g,
            norm_brand: String::new(),
            norm_flavor: String::new(),
            active: true,
        };
        entry.recompute_derived();
        entry
    }

    /// Recompute every derived field from the editable ones
    pub fn recompute_derived(&mut self) {
        self.canonical_sku = build_canonical_sku(
            &self.category,
            &self.brand,
            self.line.as_deref(),
            &self.flavor,
        );
        self.canonical_name = build_canonical_name(&self.canonical_sku, self.default_weight_g);
        self.norm_brand = normalize(&self.brand);
        self.norm_flavor = normalize(&self.flavor);
    }
}

/// Options applied to every row of a bulk import
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportOptions {
    pub category: String,
    pub default_weight_g: Option<u32>,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            category: "Табак для кальяна".to_string(),
            default_weight_g: Some(120),
        }
    }
}

/// Outcome of a bulk import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Immutable candidate set for a matching run.
///
/// Catalog changes produce a new snapshot; matches already in flight
/// keep reading the one they were built against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    entries: Vec<CatalogEntry>,
}

impl CatalogSnapshot {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Active entries, in insertion order
    pub fn active(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|e| e.active)
    }

    /// Bulk-import curated catalog text, one entry per line.
    ///
    /// Malformed lines are skipped and counted, never partially
    /// imported; blank lines are ignored.
    pub fn import(text: &str, opts: &ImportOptions) -> (Self, ImportSummary) {
        let mut entries = Vec::new();
        let mut summary = ImportSummary::default();

        for raw_line in text.lines() {
            let raw_line = raw_line.trim();
            if raw_line.is_empty() {
                continue;
            }
            match parse_catalog_line(raw_line) {
                Some(parsed) => {
                    entries.push(CatalogEntry::new(
                        &opts.category,
                        &parsed.brand,
                        parsed.line.as_deref(),
                        &parsed.flavor,
                        opts.default_weight_g,
                    ));
                    summary.imported += 1;
                }
                None => {
                    debug!("skipping malformed catalog line: '{}'", raw_line);
                    summary.skipped += 1;
                }
            }
        }

        info!(
            "📦 Catalog import: {} entries, {} lines skipped",
            summary.imported, summary.skipped
        );
        (Self::new(entries), summary)
    }

    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let snapshot = serde_json::from_str(&content)?;
        Ok(snapshot)
    }

    /// Save the snapshot as pretty-printed JSON
    pub fn save(&self, path: &Path) -> CatalogResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_computes_derived_fields() {
        let entry = CatalogEntry::new(
            "Табак для кальяна",
            "Сарма",
            None,
            "Банановое суфле",
            Some(120),
        );
        assert_eq!(
            entry.canonical_sku,
            "Табак для кальяна \"Сарма\" Банановое суфле"
        );
        assert_eq!(
            entry.canonical_name,
            "Табак для кальяна \"Сарма\" Банановое суфле 120г."
        );
        assert_eq!(entry.norm_brand, "сарма");
        assert_eq!(entry.norm_flavor, "банановое суфле");
        assert!(entry.active);
    }

    #[test]
    fn test_recompute_after_edit() {
        let mut entry = CatalogEntry::new("C", "B", None, "Старый", None);
        entry.flavor = "Новый-Вкус".to_string();
        entry.recompute_derived();
        assert_eq!(entry.canonical_sku, "C \"B\" Новый-Вкус");
        assert_eq!(entry.norm_flavor, "новый вкус");
    }

    #[test]
    fn test_import_counts_and_skips() {
        let text = "\"Сарма\" Банановое суфле\n\
                    garbage row without quotes\n\
                    \n\
                    \"САРМА 360\" Легкая Азиатская Дыня\n";
        let (snapshot, summary) = CatalogSnapshot::import(text, &ImportOptions::default());

        assert_eq!(summary.imported, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(snapshot.len(), 2);

        let second = &snapshot.entries()[1];
        assert_eq!(second.brand, "САРМА 360");
        assert_eq!(second.line.as_deref(), Some("Легкая"));
        assert_eq!(second.default_weight_g, Some(120));
        assert_eq!(
            second.canonical_sku,
            "Табак для кальяна \"САРМА 360\" Легкая Азиатская Дыня"
        );
    }

    #[test]
    fn test_active_filter() {
        let mut inactive = CatalogEntry::new("C", "B", None, "Мята", None);
        inactive.active = false;
        let active = CatalogEntry::new("C", "B", None, "Вишня", None);
        let snapshot = CatalogSnapshot::new(vec![inactive, active]);

        let flavors: Vec<&str> = snapshot.active().map(|e| e.flavor.as_str()).collect();
        assert_eq!(flavors, ["Вишня"]);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("catalog.json");

        let (snapshot, _) =
            CatalogSnapshot::import("\"Сарма\" Банановое суфле", &ImportOptions::default());
        snapshot.save(&path).expect("Failed to save snapshot");

        let restored = CatalogSnapshot::load(&path).expect("Failed to load snapshot");
        assert_eq!(restored.entries(), snapshot.entries());
    }
}
