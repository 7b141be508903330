//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application
//! state. View models are created via `AppState::compute_viewmodel()` and
//! consumed by the renderer; they contain no business logic, only
//! display-ready data such as formatted prices and highlight ranges.

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render the plugin UI: the
/// windowed product rows, cursor position, chrome text, and optional UI
/// elements like the search bar and empty state.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Product rows to display in the table.
    pub display_items: Vec<DisplayItem>,

    /// Index of the cursor row within `display_items`.
    pub cursor_index: usize,

    /// Header information (title, visible count).
    pub header: HeaderInfo,

    /// Action bar information (sort button, delete button).
    pub actions: ActionsInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Optional empty state message (when no products are visible).
    pub empty_state: Option<EmptyState>,

    /// Optional search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,
}

/// Display information for a single product row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Product title, truncated to the column width.
    pub title: String,

    /// Formatted price (e.g. `"$20.00"`).
    pub price: String,

    /// Joined tag list, truncated to the remaining width.
    pub tags: String,

    /// Whether the cursor is on this row.
    pub is_cursor: bool,

    /// Whether this product is in the selection set.
    pub is_marked: bool,

    /// Character ranges of the title to highlight for search matches.
    ///
    /// Each tuple is `(start, end)` in character indices, exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Action bar display information.
///
/// Mirrors the two buttons above the list: the sort toggle with its
/// mode-dependent label and the delete button with its selection count.
#[derive(Debug, Clone)]
pub struct ActionsInfo {
    /// Sort button label, verbatim from the active sort mode.
    pub sort_label: String,

    /// Delete button label, including the selection count when non-zero.
    pub delete_label: String,

    /// Whether the delete action is currently available.
    pub delete_enabled: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g. "j/k: navigate  space: mark  q: quit").
    pub keybindings: String,
}

/// Empty state message display information.
///
/// Shown when no products are visible (empty catalog or no-match search).
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g. "No products found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}
