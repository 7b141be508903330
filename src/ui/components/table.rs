//! Table component renderer.
//!
//! Renders the product list as a three-column table with TITLE, PRICE, and
//! TAGS columns, plus a leading mark column for products selected for
//! deletion. Supports cursor row highlighting and search match highlighting.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Width of the leading mark column (indicator plus one space).
const MARK_COLUMN_WIDTH: usize = 2;

/// Width of the TITLE column including its trailing gap.
const TITLE_COLUMN_WIDTH: usize = 37;

/// Width of the PRICE column including its trailing gap.
const PRICE_COLUMN_WIDTH: usize = 10;

/// Renders the table column headers at the specified row.
///
/// Displays "TITLE", "PRICE", and "TAGS" column headers with bold styling,
/// offset by the mark column.
///
/// Returns the next available row position.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", " ".repeat(MARK_COLUMN_WIDTH));
    print!("{:<TITLE_COLUMN_WIDTH$}{:<PRICE_COLUMN_WIDTH$}{}", "TITLE", "PRICE", "TAGS");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// Returns the next available row position (row + number of items).
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single table row at the specified row position.
///
/// Layout:
///
/// ```text
/// [mark 2] [TITLE 37] [PRICE 10] [TAGS remainder] [padding to fill line]
/// ```
///
/// Styling precedence:
///
/// 1. Cursor row background (if `is_cursor`)
/// 2. Search match highlights on the title (unless the cursor is here)
/// 3. Normal text color
///
/// The mark indicator uses the marked color unless the cursor row background
/// would clash with it. The row is padded to fill the entire terminal width so
/// the cursor background renders as a full bar.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_cursor {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if item.is_marked {
        if !item.is_cursor {
            print!("{}", Theme::fg(&theme.colors.marked_fg));
        }
        print!("* ");
        if !item.is_cursor {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
    } else {
        print!("{}", " ".repeat(MARK_COLUMN_WIDTH));
    }

    if item.highlight_ranges.is_empty() {
        print!("{}", item.title);
    } else {
        helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_cursor);
    }

    let title_len = item.title.chars().count();
    print!("{}", " ".repeat(TITLE_COLUMN_WIDTH.saturating_sub(title_len)));

    print!("{:<PRICE_COLUMN_WIDTH$}", item.price);

    print!("{}", item.tags);
    let tags_len = item.tags.chars().count();

    let line_len = MARK_COLUMN_WIDTH + TITLE_COLUMN_WIDTH + PRICE_COLUMN_WIDTH + tags_len;
    let padding = cols.saturating_sub(line_len);
    print!("{}", " ".repeat(padding));

    print!("{}", Theme::reset());
    row + 1
}
