//! Favorites selection with a fixed capacity.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::id::ListingId;

/// Default number of favorites a buyer can pin.
pub const DEFAULT_MAX_SELECTED: usize = 5;

/// Result of toggling a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Selection full; nothing changed. Callers show a transient notice.
    AtCapacity,
}

/// Caller-owned set of pinned favorites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<ListingId>,
    max_selected: usize,
}

impl Selection {
    #[must_use]
    pub fn new(max_selected: usize) -> Self {
        Self {
            ids: BTreeSet::new(),
            max_selected,
        }
    }

    /// Add a listing if not selected, remove it otherwise.
    pub fn toggle(&mut self, id: ListingId) -> ToggleOutcome {
        if self.ids.remove(&id) {
            return ToggleOutcome::Removed;
        }
        if self.ids.len() >= self.max_selected {
            tracing::debug!(
                listing_id = %id,
                max_selected = self.max_selected,
                "favorites at capacity"
            );
            return ToggleOutcome::AtCapacity;
        }
        self.ids.insert(id);
        ToggleOutcome::Added
    }

    #[must_use]
    pub fn contains(&self, id: &ListingId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.max_selected
    }

    /// Snapshot for a [`FilterState`](super::FilterState).
    #[must_use]
    pub fn ids(&self) -> &BTreeSet<ListingId> {
        &self.ids
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SELECTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = Selection::new(2);
        assert_eq!(selection.toggle(ListingId::from("a")), ToggleOutcome::Added);
        assert_eq!(selection.toggle(ListingId::from("a")), ToggleOutcome::Removed);
        assert!(selection.is_empty());
    }

    #[test]
    fn full_selection_rejects_new_ids_without_mutation() {
        let mut selection = Selection::new(2);
        selection.toggle(ListingId::from("a"));
        selection.toggle(ListingId::from("b"));
        let before = selection.clone();

        assert_eq!(selection.toggle(ListingId::from("c")), ToggleOutcome::AtCapacity);
        assert_eq!(selection, before);
        assert!(!selection.contains(&ListingId::from("c")));
    }

    #[test]
    fn full_selection_still_allows_removal() {
        let mut selection = Selection::new(1);
        selection.toggle(ListingId::from("a"));
        assert!(selection.is_full());
        assert_eq!(selection.toggle(ListingId::from("a")), ToggleOutcome::Removed);
    }
}
