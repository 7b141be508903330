//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and worker responses, translating them into state changes and action
//! sequences. It is the single control-flow coordinator: every event's full
//! effect, state mutation plus recomputation of the visible list, runs to
//! completion inside [`handle_event`] before the next event is processed,
//! so no two user actions ever interleave.
//!
//! # Event Types
//!
//! - **Navigation**: `CursorDown`, `CursorUp`
//! - **List operations**: `ToggleSelect`, `ToggleSort`, `DeleteSelected`
//! - **Search input**: `SearchMode`, `FocusSearchBar`, `FocusResults`,
//!   `ExitSearch`, `Char`, `Backspace`, `Escape`
//! - **Shell**: `CloseFocus`, `LoadCatalog`, `WorkerResponse`

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes them strictly in arrival
/// order.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the cursor down by one position (wraps to top).
    CursorDown,
    /// Moves the cursor up by one position (wraps to bottom).
    CursorUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Toggles selection of the product under the cursor (item tapped).
    ToggleSelect,
    /// Advances the sort cycle; always clears the selection.
    ToggleSort,
    /// Deletes all selected products; no-op when nothing is selected.
    DeleteSelected,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the result list (from typing focus).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears the search query and returns to normal mode.
    Escape,

    /// Requests a catalog load from the background worker.
    ///
    /// Posted by the shim once the filesystem permission is granted,
    /// carrying the configured catalog override path.
    LoadCatalog {
        /// Optional override path to the catalog file.
        catalog_file: Option<String>,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions.
///
/// Pattern-matches on the event type, calls state mutation methods, and
/// collects actions to be executed by the plugin runtime. The returned
/// `bool` reports whether the UI should re-render.
///
/// # Errors
///
/// Returns errors from state mutation methods. The list engine itself is
/// total, so in practice only collaborator failures surface here.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::ToggleSelect => {
            let changed = state.toggle_cursor_selection();
            Ok((changed, vec![]))
        }
        Event::ToggleSort => {
            state.toggle_sort();
            Ok((true, vec![]))
        }
        Event::DeleteSelected => {
            let changed = state.delete_selected();
            Ok((changed, vec![]))
        }
        Event::SearchMode => {
            use super::modes::{InputMode, SearchFocus};
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query = String::new();
            state.refresh_visible();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            use super::modes::{InputMode, SearchFocus};
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            use super::modes::{InputMode, SearchFocus};

            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                state.refresh_visible();
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            use super::modes::InputMode;
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            state.refresh_visible();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            use super::modes::InputMode;

            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, char = %c, "search query updated");
            state.refresh_visible();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            use super::modes::InputMode;
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.search_query.pop();
            state.refresh_visible();
            Ok((true, vec![]))
        }
        Event::Escape => {
            use super::modes::InputMode;
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            state.refresh_visible();
            Ok((true, vec![]))
        }
        Event::LoadCatalog { catalog_file } => {
            tracing::debug!(catalog_file = ?catalog_file, "requesting catalog load");
            Ok((
                false,
                vec![Action::PostToWorker(WorkerMessage::load_catalog(
                    catalog_file.clone(),
                ))],
            ))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::CatalogLoaded { products } => {
                if &state.products == products {
                    tracing::debug!("catalog unchanged, skipping render");
                    Ok((false, vec![]))
                } else {
                    tracing::debug!(product_count = products.len(), "catalog loaded");
                    state.set_catalog(products.clone());
                    Ok((true, vec![]))
                }
            }
            WorkerResponse::Error { message } => {
                tracing::error!("worker error: {}", message);
                Ok((false, vec![]))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{InputMode, SearchFocus, SortMode};
    use crate::domain::Product;
    use crate::ui::theme::Theme;

    fn product(id: i64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: String::new(),
            price,
            image: String::new(),
            tags: vec![],
        }
    }

    fn state() -> AppState {
        AppState::new(
            vec![
                product(1, "Red Shoe", 20.0),
                product(2, "Blue Hat", 10.0),
            ],
            Theme::default(),
        )
    }

    #[test]
    fn chars_are_ignored_outside_search_mode() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn typed_query_refreshes_the_visible_list() {
        let mut state = state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "shoe".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        assert_eq!(state.visible_products.len(), 1);
        assert_eq!(state.visible_products[0].id, 1);

        handle_event(&mut state, &Event::Backspace).unwrap();
        handle_event(&mut state, &Event::Backspace).unwrap();
        // "sh" is below the threshold, so the filter is a no-op again.
        assert_eq!(state.visible_products.len(), 2);
    }

    #[test]
    fn exit_search_clears_the_query() {
        let mut state = state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "shoe".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
        assert_eq!(state.visible_products.len(), 2);
    }

    #[test]
    fn focus_results_with_empty_query_returns_to_normal() {
        let mut state = state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('a')).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
    }

    #[test]
    fn toggle_sort_event_advances_mode_and_clears_marks() {
        let mut state = state();
        handle_event(&mut state, &Event::ToggleSelect).unwrap();
        assert_eq!(state.selection.count(), 1);

        let (render, _) = handle_event(&mut state, &Event::ToggleSort).unwrap();
        assert!(render);
        assert_eq!(state.sort_mode, SortMode::Ascending);
        assert_eq!(state.selection.count(), 0);
        // Ascending by price: Blue Hat (10) first.
        assert_eq!(state.visible_products[0].id, 2);
    }

    #[test]
    fn delete_selected_event_reports_no_render_when_nothing_marked() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::DeleteSelected).unwrap();
        assert!(!render);
        assert_eq!(state.products.len(), 2);
    }

    #[test]
    fn close_focus_emits_the_close_action() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn load_catalog_event_posts_a_worker_request() {
        let mut state = state();
        let (render, actions) = handle_event(
            &mut state,
            &Event::LoadCatalog {
                catalog_file: Some("~/catalogs/shoes.json".to_string()),
            },
        )
        .unwrap();

        assert!(!render);
        assert_eq!(actions.len(), 1);
        match &actions[0] {
            Action::PostToWorker(WorkerMessage::LoadCatalog { catalog_file, .. }) => {
                assert_eq!(catalog_file.as_deref(), Some("~/catalogs/shoes.json"));
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn identical_catalog_reload_skips_render() {
        let mut state = state();
        let same = state.products.clone();
        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::CatalogLoaded { products: same }),
        )
        .unwrap();
        assert!(!render);

        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::CatalogLoaded {
                products: vec![product(9, "Green Scarf", 5.0)],
            }),
        )
        .unwrap();
        assert!(render);
        assert_eq!(state.products.len(), 1);
    }
}
