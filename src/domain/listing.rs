//! Listing inputs as supplied by the market-analytics provider.
//!
//! The analytics provider benchmarks each listing against a comparable group
//! (zone, building or typology) and ships the results as plain fields. These
//! types mirror that shape; nothing here is computed locally.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::ListingId;
use super::money::Price;
use super::rank::TypologyRank;

/// Coarse price category assigned upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Categoria {
    Oportunidad,
    BajoPromedio,
    Promedio,
    SobrePromedio,
    Premium,
}

impl Categoria {
    /// Wire name of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Oportunidad => "oportunidad",
            Self::BajoPromedio => "bajo_promedio",
            Self::Promedio => "promedio",
            Self::SobrePromedio => "sobre_promedio",
            Self::Premium => "premium",
        }
    }
}

impl fmt::Display for Categoria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Construction state of the unit.
///
/// Unknown upstream values collapse into [`ConstructionState::Otro`]; only the
/// distinction between pre-sale and everything else drives decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionState {
    Preventa,
    EnConstruccion,
    EntregaInmediata,
    #[default]
    #[serde(other)]
    Otro,
}

impl ConstructionState {
    /// Pre-sale units have not been delivered yet.
    #[must_use]
    pub const fn is_preventa(&self) -> bool {
        matches!(self, Self::Preventa)
    }
}

/// A listing's position against its comparable group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketPosition {
    /// Signed percent delta vs. the comparable group; `None` when no group existed.
    pub diferencia_pct: Option<f64>,
    pub categoria: Categoria,
    pub dias_en_mercado: Option<u32>,
}

impl MarketPosition {
    #[must_use]
    pub const fn new(
        diferencia_pct: Option<f64>,
        categoria: Categoria,
        dias_en_mercado: Option<u32>,
    ) -> Self {
        Self {
            diferencia_pct,
            categoria,
            dias_en_mercado,
        }
    }

    /// Days on market, zero when unknown.
    #[must_use]
    pub fn dias(&self) -> u32 {
        self.dias_en_mercado.unwrap_or(0)
    }

    /// Rounded delta, or `None` when there was nothing to compare against.
    #[must_use]
    pub fn rounded_delta(&self) -> Option<i64> {
        self.diferencia_pct.map(round_half_up)
    }
}

/// One per-listing record from the analytics provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    pub id: ListingId,
    #[serde(default)]
    pub precio: Option<Price>,
    #[serde(default)]
    pub diferencia_pct: Option<f64>,
    pub categoria: Categoria,
    #[serde(default)]
    pub dias_en_mercado: Option<u32>,
    #[serde(default)]
    pub unidades_en_edificio: Option<u32>,
    #[serde(default)]
    pub posicion_en_tipologia: Option<u32>,
    #[serde(default)]
    pub unidades_misma_tipologia: Option<u32>,
    #[serde(default)]
    pub estado_construccion: ConstructionState,
    /// Structured scarcity count, when the provider ships one.
    #[serde(default)]
    pub escasez: Option<u32>,
    /// Free-text rationale from older pipelines.
    #[serde(default)]
    pub razon: Option<String>,
}

impl AnalyticsRecord {
    #[must_use]
    pub fn market_position(&self) -> MarketPosition {
        MarketPosition::new(self.diferencia_pct, self.categoria, self.dias_en_mercado)
    }

    #[must_use]
    pub fn typology_rank(&self) -> Option<TypologyRank> {
        TypologyRank::from_fields(self.posicion_en_tipologia, self.unidades_misma_tipologia)
    }
}

/// Round half-up toward positive infinity (`-12.5 → -12`, `12.5 → 13`).
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
