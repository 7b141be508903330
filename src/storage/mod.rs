//! Storage layer for the seed product catalog.
//!
//! This module provides the catalog source abstraction used to seed the
//! in-memory product list. The catalog is read-only from the plugin's point
//! of view: deletions happen in memory and are intentionally not written
//! back, so a fresh session always starts from the seed again.
//!
//! # Modules
//!
//! - `backend`: Catalog source trait abstraction
//! - `json`: JSON file source with an embedded default catalog
//! - `models`: Seed file record types separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::CatalogSource;
pub use json::JsonCatalog;
pub use models::{CatalogFile, ProductRecord};
