//! Seed file record types for the catalog source.
//!
//! This module defines the raw record types of the seed catalog document.
//! They are separate from domain models to keep a clear boundary between
//! the on-disk representation and the engine's types.

use crate::domain::Product;
use serde::{Deserialize, Serialize};

/// Top-level structure of a seed catalog document.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "products": [
///     {
///       "id": 1,
///       "title": "Red Shoe",
///       "description": "Classic canvas sneaker",
///       "price": 20.0,
///       "image": "https://example.com/red-shoe.png",
///       "tags": ["shoe"]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Version of the seed format for future migrations.
    pub version: u32,

    /// Seed products in display order.
    #[serde(default)]
    pub products: Vec<ProductRecord>,
}

/// One product record as it appears in the seed document.
///
/// The field schema mirrors [`Product`]; keeping a distinct type lets the
/// seed format evolve without leaking storage concerns into the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            price: record.price,
            image: record.image,
            tags: record.tags,
        }
    }
}
