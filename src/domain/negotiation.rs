//! Negotiation leverage scoring.
//!
//! Scores how much room a buyer has to negotiate, on a 0-5 scale. Each factor
//! is independent and additive; the sum is capped at [`MAX_SCORE`].
//!
//! | Factor                                         | Points |
//! |------------------------------------------------|--------|
//! | Days on market > 1.5 × zone median             | 2      |
//! | Days on market > zone median                   | 1      |
//! | Price > 5% over group average                  | 2      |
//! | Price over group average                       | 1      |
//! | Cheaper units of the same typology in building | 1      |
//! | 5+ units for sale in the building              | 1      |
//! | Ready to move in and listed > 60 days          | 1      |

use std::fmt;

use serde::Serialize;

use super::listing::{AnalyticsRecord, ConstructionState};

/// Upper bound of the leverage score.
pub const MAX_SCORE: u8 = 5;

/// Shown when no factor triggered. Not a factor itself.
pub const SELLER_STRONG_POSITION: &str = "El vendedor tiene una posición firme";

const STALE_DAYS: u32 = 60;
const HIGH_INVENTORY_UNITS: u32 = 5;

/// Leverage tier derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeverageTier {
    Alto,
    Moderado,
    Bajo,
}

impl LeverageTier {
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= 4 {
            Self::Alto
        } else if score >= 2 {
            Self::Moderado
        } else {
            Self::Bajo
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Alto => "alto",
            Self::Moderado => "moderado",
            Self::Bajo => "bajo",
        }
    }
}

impl fmt::Display for LeverageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing fields the scorer reads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NegotiationInput {
    pub dias_en_mercado: Option<u32>,
    /// Positive means above the group average.
    pub diferencia_pct: Option<f64>,
    pub posicion_en_tipologia: Option<u32>,
    pub unidades_misma_tipologia: Option<u32>,
    pub unidades_en_edificio: Option<u32>,
    pub estado_construccion: ConstructionState,
}

impl From<&AnalyticsRecord> for NegotiationInput {
    fn from(record: &AnalyticsRecord) -> Self {
        Self {
            dias_en_mercado: record.dias_en_mercado,
            diferencia_pct: record.diferencia_pct,
            posicion_en_tipologia: record.posicion_en_tipologia,
            unidades_misma_tipologia: record.unidades_misma_tipologia,
            unidades_en_edificio: record.unidades_en_edificio,
            estado_construccion: record.estado_construccion,
        }
    }
}

/// Buyer leverage for one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NegotiationAssessment {
    pub score: u8,
    pub tier: LeverageTier,
    pub factors: Vec<String>,
}

impl NegotiationAssessment {
    /// First factor, or the strong-seller fallback when nothing triggered.
    #[must_use]
    pub fn headline_or_fallback(&self) -> &str {
        self.factors
            .first()
            .map_or(SELLER_STRONG_POSITION, String::as_str)
    }

    #[must_use]
    pub fn seller_holds_position(&self) -> bool {
        self.factors.is_empty()
    }
}

/// Score buyer leverage against the zone median days on market.
#[must_use]
pub fn assess(input: &NegotiationInput, mediana_zona: u32) -> NegotiationAssessment {
    let mut raw: u8 = 0;
    let mut factors = Vec::new();

    let dias = input.dias_en_mercado.unwrap_or(0);
    let mediana = f64::from(mediana_zona);
    if f64::from(dias) > mediana * 1.5 {
        raw += 2;
        factors.push(format!(
            "Lleva {dias} días publicado, muy por encima de la mediana de la zona ({mediana_zona})"
        ));
    } else if dias > mediana_zona {
        raw += 1;
        factors.push(format!(
            "Lleva {dias} días publicado, más que la mediana de la zona ({mediana_zona})"
        ));
    }

    if let Some(diff) = input.diferencia_pct {
        if diff > 5.0 {
            raw += 2;
            factors.push(format!(
                "Precio {:.0}% sobre el promedio de su grupo",
                diff.round()
            ));
        } else if diff > 0.0 {
            raw += 1;
            factors.push("Precio levemente sobre el promedio de su grupo".to_string());
        }
    }

    if let (Some(posicion), Some(misma)) =
        (input.posicion_en_tipologia, input.unidades_misma_tipologia)
    {
        if posicion > 1 && misma >= 2 {
            raw += 1;
            let cheaper = posicion - 1;
            if cheaper == 1 {
                factors.push("Hay 1 unidad más barata de la misma tipología".to_string());
            } else {
                factors.push(format!(
                    "Hay {cheaper} unidades más baratas de la misma tipología"
                ));
            }
        }
    }

    if let Some(unidades) = input.unidades_en_edificio {
        if unidades >= HIGH_INVENTORY_UNITS {
            raw += 1;
            factors.push(format!("{unidades} unidades a la venta en el mismo edificio"));
        }
    }

    if !input.estado_construccion.is_preventa() && dias > STALE_DAYS {
        raw += 1;
        factors.push(format!(
            "Lista para habitar y sin vender hace más de {STALE_DAYS} días"
        ));
    }

    let score = raw.min(MAX_SCORE);
    let tier = LeverageTier::from_score(score);

    tracing::trace!(raw, score, tier = %tier, "negotiation assessed");

    NegotiationAssessment {
        score,
        tier,
        factors,
    }
}
