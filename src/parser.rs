//! Catalog Line Parser
//!
//! Parses one line of curated catalog text: a double-quoted brand
//! followed by an optional line marker and the flavor, e.g.
//! `"Сарма" Банановое суфле` or `"САРМА 360" Легкая Азиатская Дыня`.

use lazy_static::lazy_static;
use regex::Regex;

/// Line markers recognized in priority order
pub const LINE_MARKERS: [&str; 2] = ["Легкая", "Крепкая"];

lazy_static! {
    static ref QUOTED_BRAND: Regex = Regex::new(r#"^"([^"]+)"\s*(.*)$"#).unwrap();
}

/// A successfully parsed catalog line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub brand: String,
    pub line: Option<String>,
    pub flavor: String,
}

/// Parse a curated catalog line into brand, optional line marker and
/// flavor.
///
/// Intentionally strict: malformed input yields `None` so the caller
/// skips the row, and a partial entry is never produced.
pub fn parse_catalog_line(line: &str) -> Option<ParsedLine> {
    let line = line.trim();
    if !line.contains('"') {
        return None;
    }

    let caps = QUOTED_BRAND.captures(line)?;
    let brand = caps[1].trim().to_string();
    let rest = caps[2].trim();

    let mut marker = None;
    let mut flavor = rest;
    for candidate in LINE_MARKERS {
        // The marker must be a whole leading word, hence the space
        if let Some(tail) = rest
            .strip_prefix(candidate)
            .and_then(|t| t.strip_prefix(' '))
        {
            marker = Some(candidate.to_string());
            flavor = tail.trim();
            break;
        }
    }

    if flavor.is_empty() {
        return None;
    }

    Some(ParsedLine {
        brand,
        line: marker,
        flavor: flavor.to_string(),
    })
}
