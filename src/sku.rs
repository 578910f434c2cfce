//! Canonical SKU and Display Name Builders
//!
//! Both identifiers are business-visible and stable: byte-identical
//! output for identical input is a hard contract, never hand-edited.

/// Build the canonical SKU: category, quoted brand, optional line
/// marker, flavor, space-separated.
pub fn build_canonical_sku(
    category: &str,
    brand: &str,
    line: Option<&str>,
    flavor: &str,
) -> String {
    match line {
        Some(line) => format!("{} \"{}\" {} {}", category, brand, line, flavor),
        None => format!("{} \"{}\" {}", category, brand, flavor),
    }
}

/// Build the display name: the SKU plus a ` {n}г.` suffix when a
/// positive weight is known.
pub fn build_canonical_name(sku: &str, weight_g: Option<u32>) -> String {
    match weight_g {
        Some(weight) if weight > 0 => format!("{} {}г.", sku, weight),
        _ => sku.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sku_with_line() {
        assert_eq!(
            build_canonical_sku("Табак для кальяна", "САРМА 360", Some("Легкая"), "Дыня"),
            "Табак для кальяна \"САРМА 360\" Легкая Дыня"
        );
    }

    #[test]
    fn test_sku_without_line() {
        assert_eq!(
            build_canonical_sku("Табак для кальяна", "Сарма", None, "Банановое суфле"),
            "Табак для кальяна \"Сарма\" Банановое суфле"
        );
    }

    #[test]
    fn test_sku_deterministic() {
        let a = build_canonical_sku("C", "B", Some("L"), "F");
        let b = build_canonical_sku("C", "B", Some("L"), "F");
        assert_eq!(a, b);
    }

    #[test]
    fn test_name_suffix() {
        assert_eq!(build_canonical_name("X", Some(120)), "X 120г.");
        assert_eq!(build_canonical_name("X", None), "X");
        assert_eq!(build_canonical_name("X", Some(0)), "X");
    }
}
