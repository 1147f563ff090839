//! Fiduciary synthesis: the buyer-facing verdict for a single listing.
//!
//! Combines the listing's price delta against its comparable group with its
//! time on market, construction state and scarcity into a short verdict, a
//! headline, supporting detail lines and a recommended next step.
//!
//! # Classification
//!
//! - **Oportunidad**: at least 10% under the comparable group.
//! - **Premium**: at least 10% over the comparable group.
//! - **Justo**: within ±10%.
//! - **Sospechoso**: an oportunidad that is too cheap for too long, i.e.
//!   `delta <= -20%` and at least the zone median days on market, or any
//!   oportunidad listed at least the zone mean days. This is the only
//!   non-monotone rule: a cheaper, older unit can rank worse than a
//!   moderately cheap fresh one.
//! - **SinDatos**: no comparable group. Never folded into `Justo`.
//!
//! # Example
//!
//! ```
//! use fiducia::domain::fiduciary::{synthesize, FiduciaryInput, Verdict};
//! use fiducia::domain::listing::{Categoria, MarketPosition};
//! use fiducia::domain::thresholds::GroupThresholds;
//!
//! let position = MarketPosition::new(Some(-15.0), Categoria::Oportunidad, Some(40));
//! let input = FiduciaryInput::new(position, GroupThresholds::default());
//! let synthesis = synthesize(&input);
//!
//! assert_eq!(synthesis.tipo, Verdict::Oportunidad);
//! assert_eq!(synthesis.headline, "15% bajo mercado + 1 mes");
//! ```

use std::fmt;

use serde::Serialize;

use super::listing::MarketPosition;
use super::rank::{RankStanding, TypologyRank};
use super::scarcity::ScarcitySignal;
use super::thresholds::GroupThresholds;

/// Percent delta at or beyond which a listing leaves the fair-price band.
pub const FAIR_BAND_PCT: i64 = 10;

/// Percent delta at or below which an aged bargain becomes suspicious.
pub const DEEP_DISCOUNT_PCT: i64 = -20;

/// Listings at or below this many days read as "recent".
pub const RECENT_DAYS: u32 = 30;

pub const ACTION_SOSPECHOSO: &str = "Pregunta por qué lleva tanto tiempo";
pub const ACTION_OPORTUNIDAD_PREVENTA: &str = "Verificá la fecha de entrega";
pub const ACTION_OPORTUNIDAD: &str = "Verificá el estado de la unidad";
pub const ACTION_PREMIUM_STALE: &str = "Podés tantear con una oferta";
pub const ACTION_PREMIUM_FRESH: &str = "Si te gusta, no demorés";
pub const ACTION_JUSTO: &str = "Tomá tu tiempo para comparar";
pub const ACTION_SIN_DATOS: &str = "Pedí info de otras unidades para comparar";

pub const HEADLINE_SIN_DATOS: &str = "Sin datos para comparar";
pub const DETAIL_PREVENTA: &str = "Preventa: la unidad todavía no fue entregada";

/// Verdict category shown on cards and used to color the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Oportunidad,
    Premium,
    Justo,
    Sospechoso,
    /// No comparable group existed for this listing.
    SinDatos,
}

impl Verdict {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Oportunidad => "oportunidad",
            Self::Premium => "premium",
            Self::Justo => "justo",
            Self::Sospechoso => "sospechoso",
            Self::SinDatos => "sin_datos",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the classifier looks at for one listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiduciaryInput {
    pub position: MarketPosition,
    pub thresholds: GroupThresholds,
    pub scarcity: Option<ScarcitySignal>,
    pub is_preventa: bool,
    pub rank: Option<TypologyRank>,
}

impl FiduciaryInput {
    #[must_use]
    pub const fn new(position: MarketPosition, thresholds: GroupThresholds) -> Self {
        Self {
            position,
            thresholds,
            scarcity: None,
            is_preventa: false,
            rank: None,
        }
    }

    #[must_use]
    pub const fn with_scarcity(mut self, scarcity: Option<ScarcitySignal>) -> Self {
        self.scarcity = scarcity;
        self
    }

    #[must_use]
    pub const fn with_preventa(mut self, is_preventa: bool) -> Self {
        self.is_preventa = is_preventa;
        self
    }

    #[must_use]
    pub const fn with_rank(mut self, rank: Option<TypologyRank>) -> Self {
        self.rank = rank;
        self
    }
}

/// Display-ready verdict for one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiduciarySynthesis {
    pub headline: String,
    pub detail_lines: Vec<String>,
    pub action: String,
    pub tipo: Verdict,
}

/// Classify a rounded delta, applying the suspicious-bargain downgrade.
#[must_use]
pub fn classify(delta: i64, dias: u32, thresholds: &GroupThresholds) -> Verdict {
    if delta <= -FAIR_BAND_PCT {
        let deep_and_aged = delta <= DEEP_DISCOUNT_PCT && dias >= thresholds.dias_mediana_zona;
        if deep_and_aged || dias >= thresholds.dias_promedio_zona {
            Verdict::Sospechoso
        } else {
            Verdict::Oportunidad
        }
    } else if delta >= FAIR_BAND_PCT {
        Verdict::Premium
    } else {
        Verdict::Justo
    }
}

/// Human phrase for time on market.
#[must_use]
pub fn time_phrase(dias: u32, thresholds: &GroupThresholds) -> String {
    if dias <= RECENT_DAYS {
        return "reciente".to_string();
    }
    let months = (f64::from(dias) / 30.0).round() as u32;
    if dias < thresholds.dias_mediana_zona && months == 1 {
        format!("{months} mes")
    } else {
        format!("{months} meses")
    }
}

/// Build the fiduciary synthesis for one listing.
#[must_use]
pub fn synthesize(input: &FiduciaryInput) -> FiduciarySynthesis {
    let thresholds = &input.thresholds;
    let dias = input.position.dias();
    let tiempo = time_phrase(dias, thresholds);

    let (tipo, headline) = match input.position.rounded_delta() {
        None => {
            let headline = if dias > 0 {
                format!("{tiempo} publicado")
            } else {
                HEADLINE_SIN_DATOS.to_string()
            };
            (Verdict::SinDatos, headline)
        }
        Some(delta) => {
            let tipo = classify(delta, dias, thresholds);
            let headline = match tipo {
                Verdict::Sospechoso | Verdict::Oportunidad => {
                    format!("{}% bajo mercado + {tiempo}", delta.abs())
                }
                Verdict::Premium => format!("{delta}% sobre mercado + {tiempo}"),
                Verdict::Justo | Verdict::SinDatos => format!("Precio de mercado + {tiempo}"),
            };
            (tipo, headline)
        }
    };

    let action = match tipo {
        Verdict::Sospechoso => ACTION_SOSPECHOSO,
        Verdict::Oportunidad if input.is_preventa => ACTION_OPORTUNIDAD_PREVENTA,
        Verdict::Oportunidad => ACTION_OPORTUNIDAD,
        Verdict::Premium if dias >= thresholds.dias_mediana_zona => ACTION_PREMIUM_STALE,
        Verdict::Premium => ACTION_PREMIUM_FRESH,
        Verdict::Justo => ACTION_JUSTO,
        Verdict::SinDatos => ACTION_SIN_DATOS,
    };

    let synthesis = FiduciarySynthesis {
        headline,
        detail_lines: detail_lines(input),
        action: action.to_string(),
        tipo,
    };

    tracing::trace!(
        tipo = %synthesis.tipo,
        dias,
        headline = %synthesis.headline,
        "fiduciary synthesis"
    );

    synthesis
}

fn detail_lines(input: &FiduciaryInput) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(scarcity) = input.scarcity.filter(ScarcitySignal::is_scarce) {
        let count = scarcity.count();
        if count == 1 {
            lines.push("Solo 1 similar disponible".to_string());
        } else {
            lines.push(format!("Solo {count} similares disponibles"));
        }
    }

    if input.is_preventa {
        lines.push(DETAIL_PREVENTA.to_string());
    }

    if let Some(rank) = input.rank.filter(TypologyRank::is_displayable) {
        if rank.standing() != RankStanding::Balanced {
            if let Some(label) = rank.label() {
                lines.push(label);
            }
        }
    }

    lines
}
