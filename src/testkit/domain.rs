//! Builders for domain inputs used across tests.
//!
//! Provides concise factory functions for [`AnalyticsRecord`] and
//! [`MapListing`] so tests focus on assertions rather than construction
//! boilerplate.

use rust_decimal::Decimal;

use crate::domain::cma::GroupAggregates;
use crate::domain::listing::{AnalyticsRecord, Categoria, ConstructionState};
use crate::domain::map::MapListing;
use crate::domain::ListingId;

/// Create an [`AnalyticsRecord`] with only delta and days set.
///
/// The upstream category follows the delta sign so records look realistic.
pub fn record(id: &str, diferencia_pct: Option<f64>, dias: Option<u32>) -> AnalyticsRecord {
    let categoria = match diferencia_pct {
        Some(d) if d <= -10.0 => Categoria::Oportunidad,
        Some(d) if d < 0.0 => Categoria::BajoPromedio,
        Some(d) if d >= 10.0 => Categoria::Premium,
        Some(d) if d > 0.0 => Categoria::SobrePromedio,
        _ => Categoria::Promedio,
    };
    AnalyticsRecord {
        id: ListingId::from(id),
        precio: None,
        diferencia_pct,
        categoria,
        dias_en_mercado: dias,
        unidades_en_edificio: None,
        posicion_en_tipologia: None,
        unidades_misma_tipologia: None,
        estado_construccion: ConstructionState::Otro,
        escasez: None,
        razon: None,
    }
}

/// Create `n` map listings with ids `1..=n`, all priced at `precio`.
pub fn map_listings(n: u64, precio: Decimal) -> Vec<MapListing> {
    (1..=n)
        .map(|i| map_listing(i, precio, Some(0.0)))
        .collect()
}

/// Create a single [`MapListing`].
pub fn map_listing(id: u64, precio: Decimal, diferencia_pct: Option<f64>) -> MapListing {
    MapListing {
        id: ListingId::from(id),
        precio: Some(precio),
        diferencia_pct,
        dias_en_mercado: Some(20),
    }
}

/// Group aggregates centred on `promedio` with a ±20% range.
pub fn aggregates(promedio: Decimal) -> GroupAggregates {
    GroupAggregates {
        precio_promedio: promedio,
        precio_mediana: promedio,
        precio_min: promedio * Decimal::new(8, 1),
        precio_max: promedio * Decimal::new(12, 1),
        dias_promedio: Decimal::from(90),
    }
}
