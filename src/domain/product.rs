//! Product domain model and display helpers.
//!
//! This module defines the core `Product` type representing a single catalog
//! item. Products are immutable value objects identified by `id`; the catalog
//! store guarantees that no two live products share an identifier.

use serde::{Deserialize, Serialize};

/// A single catalog item.
///
/// Every field is a plain value; products are never mutated in place. The
/// store mutates only by deleting whole products, so a `Product` handed to
/// the renderer is always a consistent snapshot.
///
/// # Fields
///
/// - `id`: Unique identifier within the catalog for the catalog's lifetime
/// - `title`: Display name, also the primary search target
/// - `description`: Display-only detail text
/// - `price`: Non-negative price, the sort key
/// - `image`: Opaque URI to external image data (not interpreted here)
/// - `tags`: Ordered labels; search matches any one of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// Formats the price for display with a currency symbol and two decimals.
    ///
    /// # Examples
    ///
    /// ```
    /// use zatalog::domain::Product;
    ///
    /// let product = Product {
    ///     id: 7,
    ///     title: "Blue Hat".to_string(),
    ///     description: String::new(),
    ///     price: 10.5,
    ///     image: String::new(),
    ///     tags: vec![],
    /// };
    /// assert_eq!(product.price_label(), "$10.50");
    /// ```
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Joins the product's tags into a single display string.
    ///
    /// Tags keep their original order and are separated by `", "`. An empty
    /// tag list produces an empty string.
    #[must_use]
    pub fn tags_label(&self) -> String {
        self.tags.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: f64, tags: &[&str]) -> Product {
        Product {
            id: 1,
            title: "Red Shoe".to_string(),
            description: "Classic canvas sneaker".to_string(),
            price,
            image: "https://example.com/red-shoe.png".to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn price_label_pads_to_two_decimals() {
        assert_eq!(product(20.0, &[]).price_label(), "$20.00");
        assert_eq!(product(10.5, &[]).price_label(), "$10.50");
        assert_eq!(product(0.0, &[]).price_label(), "$0.00");
    }

    #[test]
    fn tags_label_preserves_order() {
        assert_eq!(product(1.0, &["hat", "red"]).tags_label(), "hat, red");
        assert_eq!(product(1.0, &[]).tags_label(), "");
    }
}
