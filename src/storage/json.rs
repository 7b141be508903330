//! JSON file catalog source with an embedded default.
//!
//! This module loads the seed catalog from a JSON file, falling back to the
//! catalog embedded in the binary when no file exists. The source is
//! read-only: the plugin never writes the catalog back, so deletions live
//! only in memory for the session.

use crate::domain::error::{Result, ZatalogError};
use crate::storage::backend::CatalogSource;
use crate::storage::models::{CatalogFile, ProductRecord};
use std::collections::HashSet;
use std::path::PathBuf;

/// Default catalog compiled into the plugin.
///
/// Used when the configured catalog file does not exist, so the plugin is
/// usable out of the box.
const EMBEDDED_CATALOG: &str = include_str!("../../assets/catalog.json");

/// JSON file catalog source.
///
/// Reads the seed document lazily on [`CatalogSource::load_products`]; the
/// constructor only records the path so it can run on the worker thread
/// without touching the filesystem on the render path.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    /// Path to the seed JSON file on disk.
    file_path: PathBuf,
}

impl JsonCatalog {
    /// Creates a catalog source backed by the given file path.
    ///
    /// The file does not need to exist; a missing file means the embedded
    /// default catalog is served instead.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// Parses a seed document and enforces the id uniqueness invariant.
    ///
    /// When two records share an id, the first occurrence wins and later
    /// duplicates are dropped with a warning.
    fn parse(contents: &str) -> Result<Vec<ProductRecord>> {
        let file: CatalogFile = serde_json::from_str(contents)
            .map_err(|e| ZatalogError::Catalog(format!("failed to parse catalog JSON: {e}")))?;

        let total = file.products.len();
        let mut seen: HashSet<i64> = HashSet::with_capacity(total);
        let products: Vec<ProductRecord> = file
            .products
            .into_iter()
            .filter(|record| {
                let fresh = seen.insert(record.id);
                if !fresh {
                    tracing::warn!(product_id = record.id, "duplicate product id in seed, dropping");
                }
                fresh
            })
            .collect();

        tracing::debug!(
            version = file.version,
            total = total,
            kept = products.len(),
            "catalog document parsed"
        );

        Ok(products)
    }
}

impl CatalogSource for JsonCatalog {
    fn load_products(&self) -> Result<Vec<ProductRecord>> {
        let _span =
            tracing::debug_span!("load_catalog", path = ?self.file_path).entered();

        if self.file_path.exists() {
            tracing::debug!("loading catalog from file");
            let contents = std::fs::read_to_string(&self.file_path)?;
            Self::parse(&contents)
        } else {
            tracing::debug!("catalog file not found, using embedded default");
            Self::parse(EMBEDDED_CATALOG)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_catalog(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_products_from_file_in_document_order() {
        let (_dir, path) = write_catalog(
            r#"{
                "version": 1,
                "products": [
                    {"id": 2, "title": "Blue Hat", "description": "", "price": 10.0, "image": "", "tags": ["hat"]},
                    {"id": 1, "title": "Red Shoe", "description": "", "price": 20.0, "image": "", "tags": ["shoe"]}
                ]
            }"#,
        );

        let products = JsonCatalog::new(path).load_products().unwrap();
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(products[0].tags, vec!["hat"]);
    }

    #[test]
    fn duplicate_ids_keep_the_first_occurrence() {
        let (_dir, path) = write_catalog(
            r#"{
                "version": 1,
                "products": [
                    {"id": 1, "title": "First", "description": "", "price": 1.0, "image": "", "tags": []},
                    {"id": 1, "title": "Second", "description": "", "price": 2.0, "image": "", "tags": []},
                    {"id": 2, "title": "Third", "description": "", "price": 3.0, "image": "", "tags": []}
                ]
            }"#,
        );

        let products = JsonCatalog::new(path).load_products().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "First");
        assert_eq!(products[1].id, 2);
    }

    #[test]
    fn missing_file_serves_the_embedded_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let products = JsonCatalog::new(path).load_products().unwrap();
        assert!(!products.is_empty());

        // The embedded seed itself honors the uniqueness invariant.
        let mut seen = std::collections::HashSet::new();
        assert!(products.iter().all(|p| seen.insert(p.id)));
    }

    #[test]
    fn invalid_json_is_a_catalog_error() {
        let (_dir, path) = write_catalog("{ not json");
        let err = JsonCatalog::new(path).load_products().unwrap_err();
        assert!(matches!(err, ZatalogError::Catalog(_)));
    }

    #[test]
    fn missing_products_array_defaults_to_empty() {
        let (_dir, path) = write_catalog(r#"{"version": 1}"#);
        let products = JsonCatalog::new(path).load_products().unwrap();
        assert!(products.is_empty());
    }
}
