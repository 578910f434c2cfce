//! Prodmatch Library
//!
//! Reconciles noisy free-text sales labels against a curated product
//! catalog: text normalization, catalog line parsing, canonical SKU
//! building, flavor extraction and fuzzy matching.

pub mod catalog;
pub mod error;
pub mod extractor;
pub mod matcher;
pub mod normalizer;
pub mod parser;
pub mod scorer;
pub mod sku;
