//! Render-group bookkeeping for the map.
//!
//! The map renders visible listings in two groups: a clustered layer and a
//! pinned layer for favorites. A listing is in at most one of them at any
//! point, including in the middle of applying a new visibility map: every
//! move removes from the source group before inserting into the target.

use std::collections::BTreeSet;

use serde::Serialize;

use super::filter::{Visibility, VisibilityMap};
use crate::domain::id::ListingId;

/// One listing changing render state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub id: ListingId,
    pub from: Visibility,
    pub to: Visibility,
}

/// Current membership of the clustered and pinned groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerState {
    clustered: BTreeSet<ListingId>,
    pinned: BTreeSet<ListingId>,
}

impl LayerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of a listing; anything not rendered is hidden.
    #[must_use]
    pub fn visibility(&self, id: &ListingId) -> Visibility {
        if self.pinned.contains(id) {
            Visibility::Pinned
        } else if self.clustered.contains(id) {
            Visibility::Clustered
        } else {
            Visibility::Hidden
        }
    }

    pub fn clustered(&self) -> impl Iterator<Item = &ListingId> {
        self.clustered.iter()
    }

    pub fn pinned(&self) -> impl Iterator<Item = &ListingId> {
        self.pinned.iter()
    }

    /// True when no id sits in both groups.
    #[must_use]
    pub fn is_disjoint(&self) -> bool {
        self.clustered.is_disjoint(&self.pinned)
    }

    /// Bring the groups in line with `target` and report what moved.
    ///
    /// Listings absent from `target` are dropped from both groups.
    pub fn apply(&mut self, target: &VisibilityMap) -> Vec<Transition> {
        let mut transitions = Vec::new();

        let stale: Vec<ListingId> = self
            .clustered
            .iter()
            .chain(self.pinned.iter())
            .filter(|id| target.get(id).is_none())
            .cloned()
            .collect();
        for id in stale {
            if let Some(transition) = self.move_to(&id, Visibility::Hidden) {
                transitions.push(transition);
            }
        }

        for (id, to) in target.iter() {
            if let Some(transition) = self.move_to(id, to) {
                transitions.push(transition);
            }
        }

        debug_assert!(self.is_disjoint());
        tracing::debug!(
            moved = transitions.len(),
            clustered = self.clustered.len(),
            pinned = self.pinned.len(),
            "map layers updated"
        );

        transitions
    }

    fn move_to(&mut self, id: &ListingId, to: Visibility) -> Option<Transition> {
        let from = self.visibility(id);
        if from == to {
            return None;
        }

        match from {
            Visibility::Clustered => {
                self.clustered.remove(id);
            }
            Visibility::Pinned => {
                self.pinned.remove(id);
            }
            Visibility::Hidden => {}
        }
        match to {
            Visibility::Clustered => {
                self.clustered.insert(id.clone());
            }
            Visibility::Pinned => {
                self.pinned.insert(id.clone());
            }
            Visibility::Hidden => {}
        }

        tracing::trace!(listing_id = %id, %from, %to, "layer transition");

        Some(Transition {
            id: id.clone(),
            from,
            to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::map::filter::{
        assign_visibility, BaseSet, FilterSettings, FilterState, MapListing,
    };
    use rust_decimal_macros::dec;

    fn listings(n: u64) -> Vec<MapListing> {
        (1..=n)
            .map(|i| MapListing {
                id: ListingId::from(i),
                precio: Some(dec!(100000)),
                diferencia_pct: Some(0.0),
                dias_en_mercado: None,
            })
            .collect()
    }

    #[test]
    fn pinning_moves_out_of_cluster() {
        let listings = listings(3);
        let settings = FilterSettings::default();
        let mut layers = LayerState::new();

        let mut filters = FilterState {
            base_set: BaseSet::All,
            ..FilterState::default()
        };
        layers.apply(&assign_visibility(&listings, &filters, &settings));
        assert_eq!(layers.clustered().count(), 3);

        filters.selected_ids.insert(ListingId::from(2u64));
        let transitions = layers.apply(&assign_visibility(&listings, &filters, &settings));

        assert_eq!(
            transitions,
            vec![Transition {
                id: ListingId::from(2u64),
                from: Visibility::Clustered,
                to: Visibility::Pinned,
            }]
        );
        assert!(layers.is_disjoint());
        assert_eq!(layers.visibility(&ListingId::from(2u64)), Visibility::Pinned);
        assert_eq!(layers.clustered().count(), 2);
    }

    #[test]
    fn unpinning_returns_to_cluster_or_hides() {
        let listings = listings(15);
        let settings = FilterSettings::default();
        let mut layers = LayerState::new();

        let mut filters = FilterState {
            selected_ids: BTreeSet::from([ListingId::from(1u64), ListingId::from(15u64)]),
            ..FilterState::default()
        };
        layers.apply(&assign_visibility(&listings, &filters, &settings));
        assert_eq!(layers.pinned().count(), 2);

        filters.selected_ids.clear();
        layers.apply(&assign_visibility(&listings, &filters, &settings));

        assert_eq!(layers.visibility(&ListingId::from(1u64)), Visibility::Clustered);
        assert_eq!(layers.visibility(&ListingId::from(15u64)), Visibility::Hidden);
        assert!(layers.is_disjoint());
    }

    #[test]
    fn reapplying_same_map_moves_nothing() {
        let listings = listings(5);
        let map = assign_visibility(&listings, &FilterState::default(), &FilterSettings::default());
        let mut layers = LayerState::new();

        assert_eq!(layers.apply(&map).len(), 5);
        assert!(layers.apply(&map).is_empty());
    }

    #[test]
    fn listings_missing_from_target_are_dropped() {
        let settings = FilterSettings::default();
        let mut layers = LayerState::new();
        layers.apply(&assign_visibility(&listings(4), &FilterState::default(), &settings));

        let transitions =
            layers.apply(&assign_visibility(&listings(2), &FilterState::default(), &settings));

        assert_eq!(transitions.len(), 2);
        assert!(transitions.iter().all(|t| t.to == Visibility::Hidden));
        assert_eq!(layers.clustered().count(), 2);
    }
}
