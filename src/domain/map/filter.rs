//! Filter tuple and per-listing visibility assignment.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::fiduciary::{classify, Verdict, FAIR_BAND_PCT};
use crate::domain::id::ListingId;
use crate::domain::listing::round_half_up;
use crate::domain::money::Price;
use crate::domain::thresholds::GroupThresholds;

/// Default size of the pre-ranked "top" base set.
pub const DEFAULT_TOP_N: usize = 13;

/// Category chips offered by the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapCategory {
    Oportunidad,
    Justo,
    Premium,
}

impl MapCategory {
    /// The map's own ±10% bucket on the raw delta, without the
    /// suspicious-bargain downgrade.
    #[must_use]
    pub fn from_delta(diferencia_pct: Option<f64>) -> Option<Self> {
        let delta = diferencia_pct?;
        let band = FAIR_BAND_PCT as f64;
        Some(if delta <= -band {
            Self::Oportunidad
        } else if delta >= band {
            Self::Premium
        } else {
            Self::Justo
        })
    }

    /// Chip for a full fiduciary verdict. Suspicious and no-data listings
    /// match no chip.
    #[must_use]
    pub const fn from_verdict(verdict: Verdict) -> Option<Self> {
        match verdict {
            Verdict::Oportunidad => Some(Self::Oportunidad),
            Verdict::Justo => Some(Self::Justo),
            Verdict::Premium => Some(Self::Premium),
            Verdict::Sospechoso | Verdict::SinDatos => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Oportunidad => "oportunidad",
            Self::Justo => "justo",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for MapCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which classifier drives the category chips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryRule {
    /// ±10% on the raw delta.
    #[default]
    Simple,
    /// Full fiduciary classifier including the downgrade.
    Fiduciary,
}

impl CategoryRule {
    /// Category of a listing under this rule.
    #[must_use]
    pub fn categorize(
        &self,
        listing: &MapListing,
        thresholds: &GroupThresholds,
    ) -> Option<MapCategory> {
        match self {
            Self::Simple => MapCategory::from_delta(listing.diferencia_pct),
            Self::Fiduciary => {
                let delta = round_half_up(listing.diferencia_pct?);
                let dias = listing.dias_en_mercado.unwrap_or(0);
                MapCategory::from_verdict(classify(delta, dias, thresholds))
            }
        }
    }
}

/// Base listing set shown on the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseSet {
    /// Only the first N of the pre-ranked order.
    #[default]
    Top,
    All,
}

/// Active price filter. Bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum PriceRange {
    #[default]
    Cualquiera,
    Bounded {
        min: Option<Price>,
        max: Option<Price>,
    },
}

impl PriceRange {
    /// Build a bounded range; both bounds open means any price.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] for negative bounds or `min > max`.
    pub fn bounded(min: Option<Price>, max: Option<Price>) -> Result<Self, DomainError> {
        for value in [min, max].into_iter().flatten() {
            if value.is_sign_negative() {
                return Err(DomainError::NegativePrice { value });
            }
        }
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(DomainError::InvertedPriceRange { min, max });
            }
        }
        if min.is_none() && max.is_none() {
            return Ok(Self::Cualquiera);
        }
        Ok(Self::Bounded { min, max })
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Cualquiera)
    }

    /// Whether a listing price passes. Unknown prices only pass an inactive
    /// range.
    #[must_use]
    pub fn admits(&self, price: Option<Price>) -> bool {
        match self {
            Self::Cualquiera => true,
            Self::Bounded { min, max } => {
                let Some(price) = price else {
                    return false;
                };
                min.map_or(true, |min| price >= min) && max.map_or(true, |max| price <= max)
            }
        }
    }
}

/// A listing as the map sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapListing {
    pub id: ListingId,
    #[serde(default)]
    pub precio: Option<Price>,
    #[serde(default)]
    pub diferencia_pct: Option<f64>,
    #[serde(default)]
    pub dias_en_mercado: Option<u32>,
}

/// The caller-owned filter tuple.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub base_set: BaseSet,
    #[serde(default)]
    pub category_filters: BTreeSet<MapCategory>,
    #[serde(default)]
    pub price_range: PriceRange,
    #[serde(default)]
    pub selected_ids: BTreeSet<ListingId>,
}

/// Settings that stay fixed across filter changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSettings {
    pub top_n: usize,
    pub category_rule: CategoryRule,
    pub thresholds: GroupThresholds,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            category_rule: CategoryRule::default(),
            thresholds: GroupThresholds::default(),
        }
    }
}

/// Render state of one listing. Exactly one holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Hidden,
    Clustered,
    Pinned,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hidden => "hidden",
            Self::Clustered => "clustered",
            Self::Pinned => "pinned",
        };
        f.write_str(name)
    }
}

/// Visibility of every listing, in the pre-ranked order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisibilityMap {
    entries: Vec<(ListingId, Visibility)>,
    #[serde(skip)]
    index: BTreeMap<ListingId, usize>,
}

impl VisibilityMap {
    #[must_use]
    pub fn get(&self, id: &ListingId) -> Option<Visibility> {
        self.index.get(id).map(|&i| self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ListingId, Visibility)> {
        self.entries.iter().map(|(id, v)| (id, *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids in the given state, in pre-ranked order.
    pub fn with_state(&self, state: Visibility) -> impl Iterator<Item = &ListingId> {
        self.entries
            .iter()
            .filter(move |(_, v)| *v == state)
            .map(|(id, _)| id)
    }

    #[must_use]
    pub fn count(&self, state: Visibility) -> usize {
        self.with_state(state).count()
    }

    fn push(&mut self, id: ListingId, visibility: Visibility) {
        // Later duplicates of an id are ignored; the first ranked entry wins.
        if self.index.contains_key(&id) {
            return;
        }
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id, visibility));
    }
}

/// Visibility of a single listing at ranked position `rank` (0-indexed).
#[must_use]
pub fn visibility_of(
    listing: &MapListing,
    rank: usize,
    filters: &FilterState,
    settings: &FilterSettings,
) -> Visibility {
    if filters.selected_ids.contains(&listing.id) {
        return Visibility::Pinned;
    }

    if filters.base_set == BaseSet::Top && rank >= settings.top_n {
        return Visibility::Hidden;
    }

    if !filters.category_filters.is_empty() {
        let category = settings
            .category_rule
            .categorize(listing, &settings.thresholds);
        if !category.is_some_and(|c| filters.category_filters.contains(&c)) {
            return Visibility::Hidden;
        }
    }

    if !filters.price_range.admits(listing.precio) {
        return Visibility::Hidden;
    }

    Visibility::Clustered
}

/// Assign visibility to every listing of a pre-ranked set.
///
/// Pure: the same inputs always produce the same map.
#[must_use]
pub fn assign_visibility(
    listings: &[MapListing],
    filters: &FilterState,
    settings: &FilterSettings,
) -> VisibilityMap {
    let mut map = VisibilityMap::default();
    for (rank, listing) in listings.iter().enumerate() {
        map.push(
            listing.id.clone(),
            visibility_of(listing, rank, filters, settings),
        );
    }

    tracing::debug!(
        total = map.len(),
        pinned = map.count(Visibility::Pinned),
        clustered = map.count(Visibility::Clustered),
        hidden = map.count(Visibility::Hidden),
        "visibility assigned"
    );

    map
}
