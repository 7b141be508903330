//! Application layer coordinating state, events, and actions.
//!
//! This module is the list view-state engine: it owns the catalog, the
//! search filter, the sort mode, and the selection set, and derives the
//! visible product sequence from them. It sits between the plugin runtime
//! (`main.rs`) and the domain/storage/worker layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: Pure text search over the catalog
//! - [`handler`]: Event processing and state transition coordination
//! - [`modes`]: Input mode and sort mode state machine types
//! - [`selection`]: Multi-select tracking
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod selection;
pub mod state;

pub use actions::Action;
pub use filter::{filter_products, query_is_effective, MIN_QUERY_LEN};
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus, SortMode};
pub use selection::Selection;
pub use state::AppState;
