//! Text search filter over the product catalog.
//!
//! This module implements the pure filtering step of the view pipeline. The
//! filter is deterministic and order-preserving: the result is always a
//! subsequence of the input in the input's relative order, and the same
//! inputs always produce the same output.

use crate::domain::Product;

/// Minimum trimmed query length before filtering takes effect.
///
/// Shorter queries make the filter a no-op, so the full catalog stays
/// visible while the user is still typing the first couple of characters.
pub const MIN_QUERY_LEN: usize = 3;

/// Returns whether a query is long enough to filter the list.
///
/// The threshold looks at the trimmed query; surrounding whitespace does
/// not count toward the minimum.
#[must_use]
pub fn query_is_effective(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

/// Filters products by a text query.
///
/// If the trimmed query has fewer than [`MIN_QUERY_LEN`] characters, the
/// input is returned unchanged. Otherwise the result contains exactly the
/// products whose title, or at least one tag, contains the query as a
/// case-insensitive substring.
///
/// Matching uses the query as typed (only the length check trims it), and
/// both sides are lowercased once up front rather than per comparison.
///
/// # Examples
///
/// ```
/// use zatalog::app::filter_products;
/// use zatalog::domain::Product;
///
/// let items = vec![Product {
///     id: 1,
///     title: "Red Shoe".to_string(),
///     description: String::new(),
///     price: 20.0,
///     image: String::new(),
///     tags: vec!["shoe".to_string()],
/// }];
///
/// assert_eq!(filter_products("re", &items).len(), 1); // too short, identity
/// assert_eq!(filter_products("RED", &items).len(), 1);
/// assert_eq!(filter_products("hat", &items).len(), 0);
/// ```
#[must_use]
pub fn filter_products(query: &str, products: &[Product]) -> Vec<Product> {
    if !query_is_effective(query) {
        return products.to_vec();
    }

    let needle = query.to_lowercase();

    products
        .iter()
        .filter(|product| {
            product.title.to_lowercase().contains(&needle)
                || product
                    .tags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, title: &str, tags: &[&str]) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: String::new(),
            price: 1.0,
            image: String::new(),
            tags: tags.iter().map(ToString::to_string).collect(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Red Shoe", &["shoe"]),
            product(2, "Blue Hat", &["hat"]),
            product(3, "Red Hat", &["hat", "red"]),
        ]
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn short_query_is_identity() {
        let items = catalog();
        for query in ["", "r", "re", "  re  ", "   "] {
            assert_eq!(ids(&filter_products(query, &items)), vec![1, 2, 3]);
        }
    }

    #[test]
    fn threshold_counts_trimmed_characters() {
        assert!(!query_is_effective("ab "));
        assert!(query_is_effective(" abc "));
    }

    #[test]
    fn matches_title_or_any_tag_case_insensitively() {
        let items = catalog();
        assert_eq!(ids(&filter_products("red", &items)), vec![1, 3]);
        assert_eq!(ids(&filter_products("RED", &items)), vec![1, 3]);
        assert_eq!(ids(&filter_products("hat", &items)), vec![2, 3]);
        assert_eq!(ids(&filter_products("shoe", &items)), vec![1]);
    }

    #[test]
    fn filter_is_exact_not_approximate() {
        let items = catalog();
        // "rde" is a fuzzy match for "Red" but not a substring of any title
        // or tag, so nothing passes.
        assert!(filter_products("rde", &items).is_empty());
        assert!(filter_products("green", &items).is_empty());
    }

    #[test]
    fn result_preserves_relative_order() {
        let items = vec![
            product(10, "Alpha Red", &[]),
            product(20, "Beta", &["red"]),
            product(30, "Gamma Red", &[]),
        ];
        assert_eq!(ids(&filter_products("red", &items)), vec![10, 20, 30]);
    }

    #[test]
    fn empty_catalog_filters_to_empty() {
        assert!(filter_products("red", &[]).is_empty());
    }

    #[test]
    fn does_not_mutate_input() {
        let items = catalog();
        let before = items.clone();
        let _ = filter_products("red", &items);
        assert_eq!(items, before);
    }
}
