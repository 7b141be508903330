//! Input and sort mode state types for the application.
//!
//! This module defines the state machine enums that control user interaction
//! modes and list ordering. Input modes determine which keybindings are active
//! and how typed characters are processed; the sort mode determines the price
//! ordering of the visible list.
//!
//! # State Machine
//!
//! The application operates in one of two primary input modes:
//! - **Normal**: Default navigation and command mode
//! - **Search**: Active search with typing or result navigation focus
//!
//! The sort mode cycles through a fixed tri-state:
//! `None → Ascending → Descending → None → …`

use crate::domain::Product;

/// Focus state within search mode.
///
/// Determines whether search input is being typed or search results are being
/// navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is navigating through filtered search results.
    ///
    /// Accepts j/k for movement, space to mark, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), space (mark), s (sort),
    /// d (delete marked), / (search), q (quit).
    Normal,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is
    /// typing or navigating results.
    Search(SearchFocus),
}

/// Price ordering applied to the visible product list.
///
/// Exactly one mode is active at a time; it is session-wide UI state, not
/// per-item. The mode starts at [`SortMode::None`] and only changes through
/// [`SortMode::next`], driven by the sort button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Original catalog order, no reordering.
    #[default]
    None,

    /// Price non-decreasing.
    Ascending,

    /// Price non-increasing.
    Descending,
}

impl SortMode {
    /// Returns the successor in the fixed sort cycle.
    ///
    /// The cycle is total and wraps: `None → Ascending → Descending → None`.
    /// Three consecutive calls always return to the starting mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use zatalog::app::SortMode;
    ///
    /// assert_eq!(SortMode::None.next(), SortMode::Ascending);
    /// assert_eq!(SortMode::None.next().next().next(), SortMode::None);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::None,
        }
    }

    /// Orders a product sequence according to this mode.
    ///
    /// - `None`: returns the input unchanged (original catalog order)
    /// - `Ascending`: price non-decreasing
    /// - `Descending`: price non-increasing
    ///
    /// The sort is stable: products with equal prices keep their relative
    /// input order in every mode. The input is consumed and returned rather
    /// than mutated through a shared reference, so callers hand in the
    /// already-filtered sequence.
    #[must_use]
    pub fn apply(self, mut products: Vec<Product>) -> Vec<Product> {
        match self {
            Self::None => {}
            Self::Ascending => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
            Self::Descending => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }
        products
    }

    /// Returns the sort button label for this mode.
    ///
    /// The UI exposes this text verbatim, so the exact wording is part of
    /// the contract.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Sort by Price",
            Self::Ascending => "Sort by Price (Ascending)",
            Self::Descending => "Sort by Price (Descending)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64) -> Product {
        Product {
            id,
            title: format!("item-{id}"),
            description: String::new(),
            price,
            image: String::new(),
            tags: vec![],
        }
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn cycle_closes_after_three_steps() {
        assert_eq!(SortMode::None.next(), SortMode::Ascending);
        assert_eq!(SortMode::Ascending.next(), SortMode::Descending);
        assert_eq!(SortMode::Descending.next(), SortMode::None);
        assert_eq!(SortMode::None.next().next().next(), SortMode::None);
    }

    #[test]
    fn none_is_identity() {
        let items = vec![product(1, 20.0), product(2, 10.0), product(3, 15.0)];
        assert_eq!(ids(&SortMode::None.apply(items.clone())), ids(&items));
    }

    #[test]
    fn ascending_and_descending_reverse_distinct_prices() {
        let items = vec![product(1, 20.0), product(2, 10.0), product(3, 15.0)];

        let asc = SortMode::Ascending.apply(items.clone());
        assert_eq!(ids(&asc), vec![2, 3, 1]);

        let mut desc_expected = ids(&asc);
        desc_expected.reverse();
        let desc = SortMode::Descending.apply(items);
        assert_eq!(ids(&desc), desc_expected);
    }

    #[test]
    fn equal_prices_keep_original_relative_order() {
        let items = vec![
            product(1, 10.0),
            product(2, 5.0),
            product(3, 10.0),
            product(4, 10.0),
        ];

        let asc = SortMode::Ascending.apply(items.clone());
        assert_eq!(ids(&asc), vec![2, 1, 3, 4]);

        let desc = SortMode::Descending.apply(items);
        assert_eq!(ids(&desc), vec![1, 3, 4, 2]);
    }

    #[test]
    fn empty_input_sorts_to_empty() {
        assert!(SortMode::Ascending.apply(vec![]).is_empty());
    }

    #[test]
    fn labels_are_verbatim() {
        assert_eq!(SortMode::None.label(), "Sort by Price");
        assert_eq!(SortMode::Ascending.label(), "Sort by Price (Ascending)");
        assert_eq!(SortMode::Descending.label(), "Sort by Price (Descending)");
    }
}
