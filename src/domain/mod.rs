//! Domain layer for the Zatalog plugin.
//!
//! This module contains the core domain types for the plugin, independent of
//! Zellij-specific APIs or infrastructure concerns. Business rules live here,
//! isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`product`]: Product domain model and display helpers
//!
//! # Examples
//!
//! ```
//! use zatalog::domain::Product;
//!
//! let product = Product {
//!     id: 1,
//!     title: "Red Shoe".to_string(),
//!     description: "Classic canvas sneaker".to_string(),
//!     price: 20.0,
//!     image: "https://example.com/red-shoe.png".to_string(),
//!     tags: vec!["shoe".to_string()],
//! };
//! assert_eq!(product.price_label(), "$20.00");
//! ```

pub mod error;
pub mod product;

pub use error::{Result, ZatalogError};
pub use product::Product;
