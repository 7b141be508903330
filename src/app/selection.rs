//! Multi-select tracking for catalog items.
//!
//! This module owns the set of currently selected product ids. Selection
//! membership is meaningful only for ids present in the catalog; when the
//! store deletes products it evicts their ids here in the same update, so
//! the set never dangles.
//!
//! Cross-component effects on the selection (clearing on sort toggle,
//! eviction on delete) are explicit calls made by the compound operations in
//! [`AppState`](crate::app::AppState), never hidden side effects inside
//! unrelated setters.

use std::collections::HashSet;

/// Set of currently selected product ids.
///
/// Starts empty. Toggling is valid for any id, including ids not currently
/// in the catalog; in practice callers only toggle visible items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<i64>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles membership for `id`: removes it if selected, adds it otherwise.
    ///
    /// Applying the same toggle twice restores the prior membership.
    pub fn toggle(&mut self, id: i64) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Returns whether `id` is currently selected.
    #[must_use]
    pub fn is_selected(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// Returns the number of selected ids.
    ///
    /// Drives the delete action's enabled state: a count of zero disables it.
    #[must_use]
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether no ids are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Empties the selection.
    ///
    /// Invoked by the sort toggle (selection does not survive a reorder of
    /// the visible list) and by the deletion flow after items are removed.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Removes the given ids from the selection, ignoring absent ones.
    ///
    /// Called by the store when products are deleted so the selection never
    /// references an id that no longer exists.
    pub fn evict(&mut self, ids: &HashSet<i64>) {
        self.ids.retain(|id| !ids.contains(id));
    }

    /// Returns a snapshot of the selected ids.
    #[must_use]
    pub fn snapshot(&self) -> HashSet<i64> {
        self.ids.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let selection = Selection::new();
        assert_eq!(selection.count(), 0);
        assert!(selection.is_empty());
        assert!(!selection.is_selected(1));
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut selection = Selection::new();

        selection.toggle(7);
        assert!(selection.is_selected(7));

        selection.toggle(7);
        assert!(!selection.is_selected(7));
        assert_eq!(selection.count(), 0);
    }

    #[test]
    fn toggle_accepts_unknown_ids() {
        let mut selection = Selection::new();
        selection.toggle(-42);
        assert!(selection.is_selected(-42));
    }

    #[test]
    fn clear_empties_everything() {
        let mut selection = Selection::new();
        selection.toggle(1);
        selection.toggle(2);
        selection.clear();
        assert_eq!(selection.count(), 0);
    }

    #[test]
    fn evict_removes_only_listed_ids() {
        let mut selection = Selection::new();
        selection.toggle(1);
        selection.toggle(2);
        selection.toggle(3);

        let doomed: HashSet<i64> = [2, 9].into_iter().collect();
        selection.evict(&doomed);

        assert!(selection.is_selected(1));
        assert!(!selection.is_selected(2));
        assert!(selection.is_selected(3));
        assert_eq!(selection.count(), 2);
    }
}
