//! Action bar component renderer.
//!
//! Renders the sort and delete buttons above the product table. The sort
//! button label reflects the active sort mode; the delete button shows the
//! current selection count and is dimmed when nothing is selected.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ActionsInfo;

/// Renders the action bar at the specified row.
///
/// Layout:
///
/// ```text
/// [Sort by Price (Ascending)]   [Delete (2)]
/// ```
///
/// Both buttons are rendered in brackets. The delete button uses the marked
/// color when enabled and dimmed styling when the selection is empty.
///
/// Returns the next available row position.
pub fn render_actions(row: usize, actions: &ActionsInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!(" [{}]", actions.sort_label);
    print!("   ");

    if actions.delete_enabled {
        print!("{}", Theme::fg(&theme.colors.marked_fg));
        print!("[{}]", actions.delete_label);
    } else {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("[{}]", actions.delete_label);
    }
    print!("{}", Theme::reset());

    let line_len = 1 + actions.sort_label.len() + 2 + 3 + actions.delete_label.len() + 2;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    row + 1
}
