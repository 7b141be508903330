//! Zatalog: A Zellij plugin for browsing a product catalog.
//!
//! Zatalog is a terminal multiplexer plugin that provides:
//! - A scrollable product list with title, price, and tag columns
//! - Case-insensitive substring search over titles and tags
//! - A cycling price sort (unsorted, ascending, descending)
//! - Multi-select with bulk delete of marked products
//! - Asynchronous catalog loading via Zellij worker threads

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← List engine
//! │  - Filter, sort, selection                          │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Seed JSON   │   │ - Async load  │
//! │ - Theming     │   │ - Source API  │   │ - IPC bridge  │
//! │ - Components  │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Product model (domain/product)                   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Product, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: Seed catalog source (JSON file with embedded fallback)
//! - [`worker`]: Background worker for async catalog loading
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zatalog.wasm" {
//!         catalog_file "~/catalogs/shoes.json"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    create `AppState` with the resolved theme, subscribe to Zellij events,
//!    and request permissions.
//! 2. **Permissions Granted**: dispatch a `LoadCatalog` event; the handler
//!    emits a `PostToWorker` action and the shim posts the load request.
//! 3. **Worker Processing**: read the seed file (or the embedded fallback)
//!    and send a `CatalogLoaded` response back to the plugin.
//! 4. **UI Rendering**: compute the view model from state and render the
//!    components (header, actions, table, footer).
//!
//! # Key Design Decisions
//!
//! ## Derived Visible List
//!
//! The visible product sequence is always recomputed as filter-then-sort
//! over the full catalog. Search, sort, and deletion never mutate each
//! other's inputs, so any combination of them stays consistent.
//!
//! ## Worker-Based Loading
//!
//! Catalog file I/O runs in a separate Zellij worker thread, keeping the UI
//! thread free. Results arrive via IPC messaging as `CustomMessage` events.
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models: a clear separation between state
//! and display that pre-computes formatting and match highlighting, and
//! keeps the full pipeline testable without a terminal.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus, SortMode};
pub use domain::{Product, Result, ZatalogError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zatalog.wasm" {
///     catalog_file "~/catalogs/shoes.json"
///     theme "catppuccin-latte"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Optional override path to the seed catalog JSON file.
    ///
    /// Tilde-prefixed paths are resolved against the sandbox host mount.
    /// When unset, the catalog is read from the plugin data directory, with
    /// the embedded seed as a fallback.
    pub catalog_file: Option<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. Missing keys fall back to their defaults; the
    /// `theme` key maps to [`Config::theme_name`].
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        Self {
            catalog_file: config.get("catalog_file").cloned(),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` with the resolved theme and an empty catalog;
/// products arrive later via the worker. Theme resolution order is
/// `theme_file`, then `theme_name`, then the built-in default, falling back
/// to the default on any load failure.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zatalog plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file.clone()).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(vec![], theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_from_zellij_map() {
        let mut map = BTreeMap::new();
        map.insert("catalog_file".to_string(), "~/shoes.json".to_string());
        map.insert("theme".to_string(), "catppuccin-latte".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.catalog_file.as_deref(), Some("~/shoes.json"));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert!(config.theme_file.is_none());
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn empty_map_yields_default_config() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert!(config.catalog_file.is_none());
        assert!(config.theme_name.is_none());
        assert!(config.theme_file.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn initialize_respects_the_named_theme() {
        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-frappe");
        assert!(state.products.is_empty());
    }

    #[test]
    fn initialize_falls_back_to_default_on_unknown_theme() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }
}
