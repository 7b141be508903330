//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin. It owns the canonical product catalog, the search query, the sort
//! mode, and the selection set, and derives from them the exact sequence of
//! products to display.
//!
//! # Architecture
//!
//! `AppState` separates core data (the catalog) from derived state (the
//! visible product list) to keep state transitions simple and auditable.
//! The visible list is a pure function of exactly three inputs (catalog
//! contents, search query, and sort mode), recomputed by
//! [`AppState::refresh_visible`] after every mutation of any of them and
//! never influenced by anything else. View models are computed on demand
//! from state snapshots.
//!
//! # Compound operations
//!
//! Cross-component effects are modeled as explicit compound operations on
//! `AppState` rather than hidden side effects:
//!
//! - [`AppState::toggle_sort`] advances the sort cycle AND clears the
//!   selection (marks do not survive a reorder of the visible list).
//! - [`AppState::delete_selected`] removes the selected products from the
//!   catalog, clears the selection, and recomputes the visible list in one
//!   step, so no observer ever sees a deleted product still reported as
//!   selected.

use super::filter::{filter_products, query_is_effective};
use super::modes::{InputMode, SearchFocus, SortMode};
use super::selection::Selection;
use crate::domain::Product;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ActionsInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel,
};
use std::collections::HashSet;

/// Central application state container.
///
/// Holds the catalog, all transient UI state, and the derived visible list.
/// Mutated by the event handler in response to user input and worker
/// responses.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Canonical product catalog in seed order.
    ///
    /// Seeded once from the catalog source and mutated only by deletion;
    /// deletion is order-stable. No two products share an id.
    pub products: Vec<Product>,

    /// Products currently visible: the catalog filtered by the search query,
    /// then ordered by the sort mode.
    ///
    /// Recomputed by [`AppState::refresh_visible`] after every relevant
    /// mutation. This is the sequence handed to the renderer; it is never
    /// mutated directly.
    pub visible_products: Vec<Product>,

    /// Zero-based cursor position within `visible_products`.
    ///
    /// Clamped to valid bounds on every recompute. Wraps around during
    /// navigation.
    pub cursor_index: usize,

    /// Set of selected product ids.
    pub selection: Selection,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Current search query string.
    ///
    /// Accumulated by `Char` events, reduced by `Backspace`, cleared by
    /// `ExitSearch` and `Escape`.
    pub search_query: String,

    /// Current price ordering of the visible list.
    pub sort_mode: SortMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state seeded with an initial catalog.
    ///
    /// The selection starts empty, the sort mode starts at
    /// [`SortMode::None`], and the visible list is the seeded catalog
    /// unchanged.
    #[must_use]
    pub fn new(products: Vec<Product>, theme: Theme) -> Self {
        let mut state = Self {
            products,
            visible_products: vec![],
            cursor_index: 0,
            selection: Selection::new(),
            input_mode: InputMode::Normal,
            search_query: String::new(),
            sort_mode: SortMode::None,
            theme,
        };
        state.refresh_visible();
        state
    }

    /// Moves the cursor down by one position, wrapping to the top at the end.
    ///
    /// No-op if the visible list is empty.
    pub fn move_cursor_down(&mut self) {
        if self.visible_products.is_empty() {
            return;
        }
        self.cursor_index = (self.cursor_index + 1) % self.visible_products.len();
    }

    /// Moves the cursor up by one position, wrapping to the bottom at the top.
    ///
    /// No-op if the visible list is empty.
    pub fn move_cursor_up(&mut self) {
        if self.visible_products.is_empty() {
            return;
        }
        if self.cursor_index == 0 {
            self.cursor_index = self.visible_products.len() - 1;
        } else {
            self.cursor_index -= 1;
        }
    }

    /// Returns the product under the cursor, if any.
    #[must_use]
    pub fn cursor_product(&self) -> Option<&Product> {
        self.visible_products.get(self.cursor_index)
    }

    /// Recomputes the visible product list from the catalog, the search
    /// query, and the sort mode.
    ///
    /// The filter is always applied before the sort. The cursor is clamped
    /// to the new bounds. Every mutating event handler calls this after
    /// changing any of the three inputs; nothing else influences the result.
    pub fn refresh_visible(&mut self) {
        let _span = tracing::debug_span!("refresh_visible",
            catalog_size = self.products.len(),
            query_len = self.search_query.len(),
            sort_mode = ?self.sort_mode,
        )
        .entered();

        let filtered = filter_products(&self.search_query, &self.products);
        self.visible_products = self.sort_mode.apply(filtered);

        if self.visible_products.is_empty() {
            self.cursor_index = 0;
        } else {
            self.cursor_index = self.cursor_index.min(self.visible_products.len() - 1);
        }

        tracing::debug!(
            visible_count = self.visible_products.len(),
            "visible list recomputed"
        );
    }

    /// Replaces the catalog with a freshly loaded seed.
    ///
    /// Used when the worker reports the loaded catalog. Selection and sort
    /// state are left untouched; the visible list is recomputed.
    pub fn set_catalog(&mut self, products: Vec<Product>) {
        self.products = products;
        self.refresh_visible();
    }

    /// Deletes every catalog product whose id is in `ids`.
    ///
    /// Absent ids and the empty set are valid no-ops. Remaining products
    /// keep their relative order. Removed ids are evicted from the
    /// selection in the same call, so the selection never references a
    /// deleted product. Callers recompute the visible list afterwards.
    pub fn delete_products(&mut self, ids: &HashSet<i64>) {
        if ids.is_empty() {
            return;
        }
        let before = self.products.len();
        self.products.retain(|product| !ids.contains(&product.id));
        self.selection.evict(ids);

        tracing::debug!(
            requested = ids.len(),
            removed = before - self.products.len(),
            "products deleted from catalog"
        );
    }

    /// Advances the sort cycle and clears the selection.
    ///
    /// Marks do not survive a reorder of the visible list, since item
    /// positions change. The visible list is recomputed under the new mode.
    pub fn toggle_sort(&mut self) {
        self.sort_mode = self.sort_mode.next();
        self.selection.clear();
        self.refresh_visible();

        tracing::debug!(sort_mode = ?self.sort_mode, "sort mode advanced");
    }

    /// Toggles selection of the product under the cursor.
    ///
    /// Returns `false` (no state change) when the visible list is empty.
    pub fn toggle_cursor_selection(&mut self) -> bool {
        let Some(product) = self.cursor_product() else {
            return false;
        };
        let id = product.id;
        self.selection.toggle(id);

        tracing::debug!(
            product_id = id,
            selected = self.selection.is_selected(id),
            selection_count = self.selection.count(),
            "selection toggled"
        );
        true
    }

    /// Deletes all selected products in one observable step.
    ///
    /// Snapshots the selection, removes those products from the catalog,
    /// clears the selection, and recomputes the visible list. Returns
    /// `false` when the selection was empty (nothing to do).
    pub fn delete_selected(&mut self) -> bool {
        if self.selection.is_empty() {
            tracing::debug!("delete requested with empty selection");
            return false;
        }

        let doomed = self.selection.snapshot();
        self.delete_products(&doomed);
        self.selection.clear();
        self.refresh_visible();

        tracing::debug!(
            deleted = doomed.len(),
            remaining = self.products.len(),
            "selected products deleted"
        );
        true
    }

    /// Computes a renderable view model from current state and terminal
    /// dimensions.
    ///
    /// Handles windowing (a cursor-centered slice of the visible list),
    /// substring match highlighting, and the empty state. The sort button
    /// label and delete count are exposed through [`ActionsInfo`].
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        if self.visible_products.is_empty() {
            return UIViewModel {
                display_items: vec![],
                cursor_index: 0,
                header: self.compute_header(),
                actions: self.compute_actions(),
                footer: self.compute_footer(),
                empty_state: Some(self.compute_empty_state()),
                search_bar: self.compute_search_bar(),
            };
        }

        let available_rows = self.calculate_available_rows(rows);

        let mut visible_start = self.cursor_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.visible_products.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.visible_products.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items: Vec<DisplayItem> = self.visible_products[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, product)| {
                self.compute_display_item(product, visible_start + relative_idx, cols)
            })
            .collect();

        UIViewModel {
            display_items,
            cursor_index: self.cursor_index.saturating_sub(visible_start),
            header: self.compute_header(),
            actions: self.compute_actions(),
            footer: self.compute_footer(),
            empty_state: None,
            search_bar: self.compute_search_bar(),
        }
    }

    /// Computes the display item for one product in the visible window.
    fn compute_display_item(
        &self,
        product: &Product,
        absolute_idx: usize,
        cols: usize,
    ) -> DisplayItem {
        const TITLE_COLUMN_WIDTH: usize = 35;

        let title = if product.title.chars().count() > TITLE_COLUMN_WIDTH {
            let truncated: String = product.title.chars().take(TITLE_COLUMN_WIDTH - 3).collect();
            format!("{truncated}...")
        } else {
            product.title.clone()
        };

        let max_tags_width = cols.saturating_sub(TITLE_COLUMN_WIDTH + 14);
        let mut tags = product.tags_label();
        if tags.chars().count() > max_tags_width {
            tags = tags.chars().take(max_tags_width.saturating_sub(3)).collect();
            tags.push_str("...");
        }

        let highlight_ranges = if self.highlighting_active() {
            substring_ranges(&title, &self.search_query)
        } else {
            vec![]
        };

        DisplayItem {
            title,
            price: product.price_label(),
            tags,
            is_cursor: absolute_idx == self.cursor_index,
            is_marked: self.selection.is_selected(product.id),
            highlight_ranges,
        }
    }

    /// Whether search match highlighting should be computed.
    fn highlighting_active(&self) -> bool {
        matches!(self.input_mode, InputMode::Search(_)) && query_is_effective(&self.search_query)
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Catalog ({}) ", self.visible_products.len()),
        }
    }

    /// Computes the action bar state: the sort button label (verbatim per
    /// sort mode) and the delete button label with its enabled flag.
    fn compute_actions(&self) -> ActionsInfo {
        let count = self.selection.count();
        ActionsInfo {
            sort_label: self.sort_mode.label().to_string(),
            delete_label: if count > 0 {
                format!("Delete ({count})")
            } else {
                "Delete".to_string()
            },
            delete_enabled: count > 0,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: results  Ctrl+n/p: navigate  Type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: navigate  Space: mark  d: delete".to_string()
            }
            InputMode::Normal => {
                "j/k: navigate  Space: mark  s: sort  d: delete marked  /: search  q: quit"
                    .to_string()
            }
        };
        FooterInfo { keybindings }
    }

    /// Computes the empty-state message shown when no products are visible.
    ///
    /// The subtitle depends on whether an effective query is active: a
    /// no-match search suggests adjusting the terms, anything else invites
    /// the user to start searching.
    fn compute_empty_state(&self) -> EmptyState {
        let subtitle = if query_is_effective(&self.search_query) {
            "Try adjusting your search terms".to_string()
        } else if self.products.is_empty() {
            "The catalog is empty".to_string()
        } else {
            "Start searching to find products".to_string()
        };
        EmptyState {
            message: "No products found".to_string(),
            subtitle,
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
            })
        } else {
            None
        }
    }

    /// Calculates rows available for the product table after UI chrome.
    ///
    /// Chrome: blank line, header, border, action bar, table header,
    /// bottom border, footer. Search mode adds the 3-line search box.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(7),
            InputMode::Search(_) => total_rows.saturating_sub(10),
        }
    }
}

/// Finds the character ranges where `query` occurs in `text`,
/// case-insensitively.
///
/// Ranges are `(start, end)` character indices with exclusive end, scanning
/// left to right without overlap. Used for highlighting matched substrings
/// in product titles.
fn substring_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.trim().chars().collect();
    if needle.is_empty() {
        return vec![];
    }
    let haystack: Vec<char> = text.chars().collect();
    if haystack.len() < needle.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        let matches = haystack[i..i + needle.len()]
            .iter()
            .zip(&needle)
            .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()));
        if matches {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Event;

    fn product(id: i64, title: &str, price: f64, tags: &[&str]) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: String::new(),
            price,
            image: String::new(),
            tags: tags.iter().map(ToString::to_string).collect(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Red Shoe", 20.0, &["shoe"]),
            product(2, "Blue Hat", 10.0, &["hat"]),
            product(3, "Red Hat", 15.0, &["hat", "red"]),
        ]
    }

    fn state() -> AppState {
        AppState::new(catalog(), Theme::default())
    }

    fn visible_ids(state: &AppState) -> Vec<i64> {
        state.visible_products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn new_state_shows_catalog_in_seed_order() {
        let state = state();
        assert_eq!(visible_ids(&state), vec![1, 2, 3]);
        assert_eq!(state.sort_mode, SortMode::None);
        assert_eq!(state.selection.count(), 0);
    }

    #[test]
    fn filter_applies_before_sort() {
        let mut state = state();
        state.search_query = "hat".to_string();
        state.sort_mode = SortMode::Ascending;
        state.refresh_visible();

        // Only the hats, ordered by price: Blue Hat (10) before Red Hat (15).
        assert_eq!(visible_ids(&state), vec![2, 3]);
    }

    #[test]
    fn toggle_sort_clears_selection_every_time() {
        let mut state = state();
        for _ in 0..3 {
            state.cursor_index = 0;
            assert!(state.toggle_cursor_selection());
            assert_eq!(state.selection.count(), 1);
            state.toggle_sort();
            assert_eq!(state.selection.count(), 0);
        }
        assert_eq!(state.sort_mode, SortMode::None);
    }

    #[test]
    fn delete_selected_removes_exactly_the_marked_products() {
        let mut state = state();
        state.selection.toggle(1);
        state.selection.toggle(3);

        assert!(state.delete_selected());

        assert_eq!(visible_ids(&state), vec![2]);
        assert_eq!(state.selection.count(), 0);
        assert_eq!(state.products.len(), 1);
        assert_eq!(state.products[0].id, 2);
    }

    #[test]
    fn delete_selected_with_empty_selection_is_a_noop() {
        let mut state = state();
        assert!(!state.delete_selected());
        assert_eq!(state.products.len(), 3);
    }

    #[test]
    fn delete_products_ignores_absent_ids() {
        let mut state = state();
        let ids: HashSet<i64> = [99, 100].into_iter().collect();
        state.delete_products(&ids);
        assert_eq!(state.products.len(), 3);

        state.delete_products(&HashSet::new());
        assert_eq!(state.products.len(), 3);
    }

    #[test]
    fn deletion_evicts_selection_without_dangling_ids() {
        let mut state = state();
        state.selection.toggle(1);
        state.selection.toggle(2);

        let ids: HashSet<i64> = [1].into_iter().collect();
        state.delete_products(&ids);

        assert!(!state.selection.is_selected(1));
        assert!(state.selection.is_selected(2));
    }

    #[test]
    fn selection_of_filtered_out_items_survives_the_query() {
        let mut state = state();
        state.selection.toggle(2); // Blue Hat

        state.search_query = "red".to_string();
        state.refresh_visible();
        assert_eq!(visible_ids(&state), vec![1, 3]);
        // Hidden, but still selected.
        assert!(state.selection.is_selected(2));

        state.search_query.clear();
        state.refresh_visible();
        assert!(state.selection.is_selected(2));
    }

    #[test]
    fn cursor_wraps_both_directions() {
        let mut state = state();
        state.move_cursor_up();
        assert_eq!(state.cursor_index, 2);
        state.move_cursor_down();
        assert_eq!(state.cursor_index, 0);
    }

    #[test]
    fn cursor_is_clamped_when_the_list_shrinks() {
        let mut state = state();
        state.cursor_index = 2;
        state.search_query = "shoe".to_string();
        state.refresh_visible();
        assert_eq!(state.cursor_index, 0);
        assert_eq!(state.cursor_product().map(|p| p.id), Some(1));
    }

    #[test]
    fn empty_catalog_produces_empty_state_viewmodel() {
        let state = AppState::new(vec![], Theme::default());
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.display_items.is_empty());
        let empty = vm.empty_state.expect("empty state expected");
        assert_eq!(empty.message, "No products found");
    }

    #[test]
    fn no_match_search_suggests_adjusting_terms() {
        let mut state = state();
        state.search_query = "xyz".to_string();
        state.refresh_visible();
        let vm = state.compute_viewmodel(24, 80);
        let empty = vm.empty_state.expect("empty state expected");
        assert_eq!(empty.subtitle, "Try adjusting your search terms");
    }

    #[test]
    fn viewmodel_exposes_sort_label_and_delete_count() {
        let mut state = state();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.actions.sort_label, "Sort by Price");
        assert_eq!(vm.actions.delete_label, "Delete");
        assert!(!vm.actions.delete_enabled);

        state.toggle_sort();
        state.selection.toggle(2);
        state.selection.toggle(3);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.actions.sort_label, "Sort by Price (Ascending)");
        assert_eq!(vm.actions.delete_label, "Delete (2)");
        assert!(vm.actions.delete_enabled);
    }

    #[test]
    fn viewmodel_marks_selected_rows() {
        let mut state = state();
        state.selection.toggle(2);
        let vm = state.compute_viewmodel(24, 80);
        let marked: Vec<bool> = vm.display_items.iter().map(|i| i.is_marked).collect();
        assert_eq!(marked, vec![false, true, false]);
    }

    #[test]
    fn substring_ranges_are_case_insensitive_and_non_overlapping() {
        assert_eq!(substring_ranges("Red Shoe", "red"), vec![(0, 3)]);
        assert_eq!(substring_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert_eq!(substring_ranges("Blue Hat", "red"), Vec::<(usize, usize)>::new());
        assert_eq!(substring_ranges("Red", ""), Vec::<(usize, usize)>::new());
    }

    /// The full interaction from the product list's reference scenario:
    /// search, sort, mark, delete, and re-filter.
    #[test]
    fn end_to_end_search_sort_delete() {
        let mut state = state();

        // Query "red" matches Red Shoe (title) and Red Hat (title/tag).
        let _ = crate::app::handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "red".chars() {
            let _ = crate::app::handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        assert_eq!(visible_ids(&state), vec![1, 3]);

        // One sort toggle: ascending by price puts Red Hat (15) first.
        let _ = crate::app::handle_event(&mut state, &Event::ToggleSort).unwrap();
        assert_eq!(visible_ids(&state), vec![3, 1]);

        // Mark Red Hat and delete it.
        state.cursor_index = 0;
        let _ = crate::app::handle_event(&mut state, &Event::ToggleSelect).unwrap();
        let _ = crate::app::handle_event(&mut state, &Event::DeleteSelected).unwrap();

        assert_eq!(state.products.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(state.selection.count(), 0);

        // The query is unchanged and still filters out Blue Hat.
        assert_eq!(state.search_query, "red");
        assert_eq!(visible_ids(&state), vec![1]);
    }
}
