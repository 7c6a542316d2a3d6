//! Catalog matching: a substring-OR filter over the product snapshot.

use std::collections::HashSet;

use gearbot_core::types::ProductRecord;

/// Lowercased searchable blob for one product: display name plus related
/// keywords, space-joined and trimmed.
pub fn comparison_text(product: &ProductRecord) -> String {
    format!(
        "{} {}",
        product.name.to_lowercase(),
        product.keywords.to_lowercase()
    )
    .trim()
    .to_string()
}

/// Products whose comparison text contains at least one keyword as a
/// substring, in catalog order.
///
/// OR semantics across keywords: one incidental keyword hit is enough to
/// surface a product. No scoring, no reordering, no dedup — the catalog is
/// assumed to hold unique records. An empty keyword set matches nothing.
pub fn find_matches<'a>(
    keywords: &HashSet<String>,
    products: &'a [ProductRecord],
) -> Vec<&'a ProductRecord> {
    if keywords.is_empty() {
        return Vec::new();
    }
    products
        .iter()
        .filter(|product| {
            let text = comparison_text(product);
            keywords.iter().any(|keyword| text.contains(keyword.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn product(id: &str, name: &str, keywords: &str) -> ProductRecord {
        ProductRecord {
            id: id.into(),
            name: name.into(),
            url: format!("https://shop.example.com/{id}"),
            keywords: keywords.into(),
        }
    }

    fn catalog() -> Vec<ProductRecord> {
        vec![
            product("P1", "BOSU Elite", "balance core stability"),
            product("P2", "RMT Club", "rotation swing golf shoulder"),
            product("P3", "ProPulse Speed Trainer", "speed footwork agility"),
        ]
    }

    #[test]
    fn test_single_keyword_matches_keywords_field() {
        let products = catalog();
        let matches = find_matches(&tokenize("core strength"), &products);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "P1");
    }

    #[test]
    fn test_name_matches_too() {
        let products = catalog();
        let matches = find_matches(&tokenize("the propulse one"), &products);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "P3");
    }

    #[test]
    fn test_or_semantics_across_keywords() {
        let products = catalog();
        // "golf" only hits P2; the unknown keyword doesn't veto it
        let matches = find_matches(&tokenize("zzzqqq golf"), &products);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "P2");
    }

    #[test]
    fn test_catalog_order_preserved() {
        let products = catalog();
        // "speed" hits P3, "balance" hits P1 — result stays in catalog order
        let matches = find_matches(&tokenize("speed and balance work"), &products);
        let ids: Vec<&str> = matches.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P3"]);
    }

    #[test]
    fn test_empty_keywords_match_nothing() {
        let products = catalog();
        assert!(find_matches(&HashSet::new(), &products).is_empty());
        assert!(find_matches(&tokenize(""), &products).is_empty());
        assert!(find_matches(&tokenize("to in is"), &products).is_empty());
    }

    #[test]
    fn test_substring_not_whole_word() {
        // substring semantics: "core" is inside "encore"
        let products = vec![product("P9", "Encore Band", "")];
        let matches = find_matches(&tokenize("core"), &products);
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_filter_is_exact_over_catalog() {
        // soundness + completeness: result equals the naive filter
        let products = catalog();
        let keywords = tokenize("footwork balance golf");
        let matches = find_matches(&keywords, &products);
        for p in &products {
            let text = comparison_text(p);
            let should_match = keywords.iter().any(|k| text.contains(k.as_str()));
            let did_match = matches.iter().any(|m| m.id == p.id);
            assert_eq!(should_match, did_match, "product {}", p.id);
        }
    }
}
