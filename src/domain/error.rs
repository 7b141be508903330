//! Error types for the Zatalog plugin.
//!
//! This module defines the centralized error type [`ZatalogError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! The list engine itself has no failure modes: filtering with a short query,
//! deleting an absent id, and toggling selection on any id are all defined as
//! no-ops or identities. The variants below cover the collaborators around
//! the engine (catalog loading, themes, worker IPC).

use thiserror::Error;

/// The main error type for Zatalog plugin operations.
///
/// # Examples
///
/// ```
/// use zatalog::domain::ZatalogError;
///
/// fn load_seed() -> Result<(), ZatalogError> {
///     Err(ZatalogError::Catalog("missing products array".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ZatalogError {
    /// Seed catalog could not be read or parsed.
    ///
    /// Occurs when the catalog JSON file or the embedded default catalog is
    /// malformed. The string contains a description of what went wrong.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with background worker failed.
    ///
    /// Occurs when a plugin/worker IPC payload cannot be serialized or
    /// parsed, typically during the initial catalog load.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for Zatalog operations.
///
/// This is a type alias for `std::result::Result<T, ZatalogError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ZatalogError>;
