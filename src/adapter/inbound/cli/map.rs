//! Handler for the `map` command.

use std::collections::BTreeSet;

use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::MapArgs;
use crate::adapter::inbound::cli::{input, output};
use crate::domain::id::ListingId;
use crate::domain::map::{
    assign_visibility, FilterState, LayerState, MapCategory, MapListing, PriceRange, Selection,
    ToggleOutcome, Visibility, VisibilityMap,
};
use crate::domain::money::{whole, Price};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct VisibilityRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Precio")]
    precio: String,
    #[tabled(rename = "Estado")]
    state: Visibility,
}

/// Build the filter tuple from flags, pinning favorites up to capacity.
fn build_filters(args: &MapArgs, config: &Config) -> Result<FilterState> {
    let mut selection = Selection::new(config.map.max_selected);
    for raw in &args.select {
        let id = ListingId::new(raw.as_str());
        if selection.toggle(id) == ToggleOutcome::AtCapacity {
            output::warning(&format!(
                "favorites full ({} max), {raw} not pinned",
                config.map.max_selected
            ));
        }
    }

    let category_filters: BTreeSet<MapCategory> =
        args.category.iter().copied().map(MapCategory::from).collect();

    Ok(FilterState {
        base_set: args.base.into(),
        category_filters,
        price_range: PriceRange::bounded(args.min_price, args.max_price)?,
        selected_ids: selection.ids().clone(),
    })
}

fn rows(listings: &[MapListing], visibility: &VisibilityMap) -> Vec<VisibilityRow> {
    listings
        .iter()
        .enumerate()
        .map(|(rank, listing)| VisibilityRow {
            rank: rank + 1,
            id: listing.id.to_string(),
            precio: listing
                .precio
                .map_or_else(|| "-".to_string(), |p| whole(p).to_string()),
            state: visibility
                .get(&listing.id)
                .unwrap_or(Visibility::Hidden),
        })
        .collect()
}

/// Execute `map`.
pub fn execute(args: &MapArgs, config: &Config) -> Result<()> {
    let listings: Vec<MapListing> = input::read_json(&args.file)?;
    let filters = build_filters(args, config)?;
    let settings = config.filter_settings();

    let visibility = assign_visibility(&listings, &filters, &settings);
    let mut layers = LayerState::new();
    let transitions = layers.apply(&visibility);

    if output::is_json() {
        output::record("filters", serde_json::to_value(&filters)?);
        for (id, state) in visibility.iter() {
            output::record("visibility", json!({ "id": id, "state": state }));
        }
        output::record(
            "summary",
            json!({
                "total": visibility.len(),
                "pinned": visibility.count(Visibility::Pinned),
                "clustered": visibility.count(Visibility::Clustered),
                "hidden": visibility.count(Visibility::Hidden),
                "transitions": transitions.len(),
            }),
        );
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Archivo", args.file.display());
    output::field("Base", format!("{:?}", filters.base_set).to_lowercase());
    if !filters.category_filters.is_empty() {
        let chips: Vec<&str> = filters.category_filters.iter().map(|c| c.as_str()).collect();
        output::field("Categorías", chips.join(", "));
    }
    if filters.price_range.is_active() {
        output::field("Precio", describe_range(&filters.price_range));
    }

    let mut table = Table::new(rows(&listings, &visibility));
    table.with(Style::rounded());
    output::section("Visibilidad");
    output::lines(&table.to_string());

    output::section("Capas");
    for state in [Visibility::Pinned, Visibility::Clustered, Visibility::Hidden] {
        output::field(&output::visibility(state), visibility.count(state));
    }

    if output::verbosity() > 0 {
        output::section("Transiciones");
        for transition in &transitions {
            output::note(&format!(
                "{}: {} -> {}",
                transition.id, transition.from, transition.to
            ));
        }
    }

    Ok(())
}

fn describe_range(range: &PriceRange) -> String {
    match range {
        PriceRange::Cualquiera => "cualquiera".to_string(),
        PriceRange::Bounded { min, max } => {
            let bound = |value: &Option<Price>| {
                value.map_or_else(|| "-".to_string(), |v| whole(v).to_string())
            };
            format!("{} a {}", bound(min), bound(max))
        }
    }
}
