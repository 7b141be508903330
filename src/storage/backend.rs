//! Catalog source abstraction.
//!
//! This module defines the [`CatalogSource`] trait that abstracts over seed
//! catalog providers. The trait is minimal: the plugin only ever needs to
//! load the seed once, so there is a single operation rather than a generic
//! storage API.

use crate::domain::error::Result;
use crate::storage::models::ProductRecord;

/// Abstraction over seed catalog providers.
///
/// # Implementations
///
/// - [`JsonCatalog`](crate::storage::JsonCatalog): JSON file with embedded
///   default (the only shipped backend)
///
/// # Examples
///
/// ```no_run
/// use zatalog::storage::{CatalogSource, JsonCatalog};
/// use std::path::PathBuf;
///
/// let source = JsonCatalog::new(PathBuf::from("/tmp/catalog.json"));
/// let products = source.load_products()?;
/// # Ok::<(), zatalog::domain::ZatalogError>(())
/// ```
pub trait CatalogSource: Send {
    /// Loads all seed products in document order.
    ///
    /// Implementations must enforce id uniqueness: when two records share
    /// an id, the first occurrence wins and later duplicates are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed document cannot be read or parsed.
    fn load_products(&self) -> Result<Vec<ProductRecord>>;
}
