//! Top-level rendering coordinator.
//!
//! Provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components. Handles mode switching
//! between normal, search, and empty state layouts.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// appropriate rendering mode (normal, search, or empty state). Prints
/// ANSI-styled output using `print!`; does not clear the screen or manage
/// the terminal cursor beyond positioning.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a view model with mode-specific layout.
///
/// Chooses the rendering strategy based on view model state:
/// - Empty state: centered message display
/// - Search mode: header, search bar, actions, table, footer
/// - Normal mode: header, actions, table, footer
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(empty) = &vm.empty_state {
        components::render_empty_state(empty, theme, cols);
        return;
    }

    if let Some(search) = &vm.search_bar {
        components::render_search_mode(vm, search, theme, cols, rows);
    } else {
        components::render_normal_mode(vm, theme, cols, rows);
    }
}
