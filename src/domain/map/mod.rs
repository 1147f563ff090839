//! Map view filtering and layer assignment.
//!
//! Given a pre-ranked listing set and the caller-owned filter tuple, every
//! listing is assigned exactly one [`Visibility`]:
//!
//! 1. Selected favorites are `Pinned`, whatever the other filters say.
//! 2. Outside the top-N base set → `Hidden`.
//! 3. Category chips active and the listing's category not among them → `Hidden`.
//! 4. Price range active and the price outside it → `Hidden`.
//! 5. Otherwise `Clustered`.
//!
//! [`LayerState`] then applies the result to the two render groups without
//! ever letting a listing sit in both.

mod filter;
mod layer;
mod selection;

pub use filter::{
    assign_visibility, visibility_of, BaseSet, CategoryRule, FilterSettings, FilterState,
    MapCategory, MapListing, PriceRange, Visibility, VisibilityMap, DEFAULT_TOP_N,
};
pub use layer::{LayerState, Transition};
pub use selection::{Selection, ToggleOutcome, DEFAULT_MAX_SELECTED};
