//! Comparative market analysis (CMA) price bands.
//!
//! Derives a four-tier price ladder from the comparable group's average price
//! and compares the listing price against it. The upstream category is reused
//! as-is to pick the narrative; nothing is reclassified here.
//!
//! # Example
//!
//! ```
//! use fiducia::domain::cma::PriceBands;
//! use rust_decimal_macros::dec;
//!
//! let bands = PriceBands::from_average(dec!(100000));
//! assert_eq!(bands.venta_rapida, dec!(92000));
//! assert_eq!(bands.premium, dec!(105000));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::listing::Categoria;
use super::money::{whole, Price};

const VENTA_RAPIDA_FACTOR: Decimal = dec!(0.92);
const COMPETITIVO_FACTOR: Decimal = dec!(0.97);
const PREMIUM_FACTOR: Decimal = dec!(1.05);

/// Relative distance from the market band still counted as "at market".
const MARKET_MATCH_TOLERANCE: Decimal = dec!(0.05);

/// Differentiator count above which a premium reads as justified.
const PREMIUM_JUSTIFIED_VENTAJAS: usize = 2;

pub const NARRATIVE_SIN_DATOS: &str =
    "No hay suficientes unidades comparables para recomendar un rango de precio.";
pub const NARRATIVE_EN_RANGO: &str =
    "El precio está dentro del rango de mercado para unidades comparables.";

/// Group aggregates from the analytics provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAggregates {
    pub precio_promedio: Price,
    pub precio_mediana: Price,
    pub precio_min: Price,
    pub precio_max: Price,
    pub dias_promedio: Decimal,
}

/// Four-tier price ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBands {
    pub venta_rapida: Price,
    pub competitivo: Price,
    pub mercado: Price,
    pub premium: Price,
}

impl PriceBands {
    /// Bands derived from the group average. Non-decreasing for any
    /// non-negative average; a zero average yields all-zero bands.
    #[must_use]
    pub fn from_average(promedio: Price) -> Self {
        Self {
            venta_rapida: promedio * VENTA_RAPIDA_FACTOR,
            competitivo: promedio * COMPETITIVO_FACTOR,
            mercado: promedio,
            premium: promedio * PREMIUM_FACTOR,
        }
    }

    /// Whether `price` sits within 5% of the market band.
    #[must_use]
    pub fn matches_market(&self, price: Price) -> bool {
        (price - self.mercado).abs() < self.mercado * MARKET_MATCH_TOLERANCE
    }

    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.venta_rapida <= self.competitivo
            && self.competitivo <= self.mercado
            && self.mercado <= self.premium
    }
}

/// Listing price relative to the comparable min/max range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePosition {
    Below,
    Within,
    Above,
}

impl RangePosition {
    #[must_use]
    pub fn locate(price: Price, aggregates: &GroupAggregates) -> Self {
        if price < aggregates.precio_min {
            Self::Below
        } else if price > aggregates.precio_max {
            Self::Above
        } else {
            Self::Within
        }
    }
}

/// Inputs for one CMA report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmaInput {
    #[serde(default)]
    pub aggregates: Option<GroupAggregates>,
    pub precio: Price,
    pub categoria: Categoria,
    #[serde(default)]
    pub diferencia_pct: Option<f64>,
    #[serde(default)]
    pub ventajas: usize,
    #[serde(default)]
    pub desventajas: usize,
}

/// CMA recommendation ready for the report generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmaReport {
    pub bands: Option<PriceBands>,
    pub precio: Price,
    pub matches_market: bool,
    pub range_position: Option<RangePosition>,
    pub precio_mediana: Option<Price>,
    pub dias_promedio: Option<Decimal>,
    pub narrative: String,
}

/// Build the CMA report. Absent aggregates produce the insufficient-data
/// narrative and no bands.
#[must_use]
pub fn recommend(input: &CmaInput) -> CmaReport {
    let Some(aggregates) = input.aggregates else {
        tracing::debug!(categoria = %input.categoria, "cma without comparable aggregates");
        return CmaReport {
            bands: None,
            precio: input.precio,
            matches_market: false,
            range_position: None,
            precio_mediana: None,
            dias_promedio: None,
            narrative: NARRATIVE_SIN_DATOS.to_string(),
        };
    };

    let bands = PriceBands::from_average(aggregates.precio_promedio);
    let matches_market = bands.matches_market(input.precio);

    tracing::debug!(
        categoria = %input.categoria,
        mercado = %bands.mercado,
        precio = %input.precio,
        matches_market,
        "cma bands computed"
    );

    CmaReport {
        bands: Some(bands),
        precio: input.precio,
        matches_market,
        range_position: Some(RangePosition::locate(input.precio, &aggregates)),
        precio_mediana: Some(aggregates.precio_mediana),
        dias_promedio: Some(aggregates.dias_promedio),
        narrative: narrative(input),
    }
}

fn narrative(input: &CmaInput) -> String {
    let pct = input.diferencia_pct.map(|d| d.abs().round());

    match input.categoria {
        Categoria::Oportunidad | Categoria::BajoPromedio => match pct {
            Some(pct) => format!(
                "El precio está {pct:.0}% por debajo del promedio de unidades comparables, \
                 una posición competitiva."
            ),
            None => "El precio está por debajo del promedio de unidades comparables, \
                     una posición competitiva."
                .to_string(),
        },
        Categoria::Promedio => NARRATIVE_EN_RANGO.to_string(),
        Categoria::SobrePromedio | Categoria::Premium => {
            let above = match pct {
                Some(pct) => format!("El precio está {pct:.0}% sobre el promedio"),
                None => "El precio está sobre el promedio".to_string(),
            };
            if input.ventajas > PREMIUM_JUSTIFIED_VENTAJAS {
                format!(
                    "{above}; sus {} ventajas diferenciales pueden justificar el premium.",
                    input.ventajas
                )
            } else if input.desventajas > 0 {
                format!(
                    "{above}; conviene evaluar un ajuste de precio considerando {} desventaja(s) señalada(s).",
                    input.desventajas
                )
            } else {
                format!("{above}; conviene evaluar un ajuste de precio.")
            }
        }
    }
}

/// Bands rounded to whole currency units for display.
#[must_use]
pub fn rounded(bands: &PriceBands) -> PriceBands {
    PriceBands {
        venta_rapida: whole(bands.venta_rapida),
        competitivo: whole(bands.competitivo),
        mercado: whole(bands.mercado),
        premium: whole(bands.premium),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregates(promedio: Decimal) -> GroupAggregates {
        GroupAggregates {
            precio_promedio: promedio,
            precio_mediana: promedio,
            precio_min: promedio * dec!(0.8),
            precio_max: promedio * dec!(1.2),
            dias_promedio: dec!(90),
        }
    }

    fn input(categoria: Categoria, precio: Decimal) -> CmaInput {
        CmaInput {
            aggregates: Some(aggregates(dec!(100000))),
            precio,
            categoria,
            diferencia_pct: Some(-12.4),
            ventajas: 0,
            desventajas: 0,
        }
    }

    #[test]
    fn bands_follow_fixed_factors() {
        let bands = PriceBands::from_average(dec!(100000));
        assert_eq!(bands.venta_rapida, dec!(92000));
        assert_eq!(bands.competitivo, dec!(97000));
        assert_eq!(bands.mercado, dec!(100000));
        assert_eq!(bands.premium, dec!(105000));
    }

    #[test]
    fn bands_are_ordered_for_non_negative_averages() {
        for promedio in [dec!(0), dec!(0.01), dec!(1), dec!(73519.77), dec!(9999999)] {
            assert!(PriceBands::from_average(promedio).is_ordered(), "{promedio}");
        }
    }

    #[test]
    fn zero_average_yields_zero_bands() {
        let bands = PriceBands::from_average(Decimal::ZERO);
        assert_eq!(bands.premium, Decimal::ZERO);
        assert!(!bands.matches_market(Decimal::ZERO));
    }

    #[test]
    fn market_match_is_strict_five_percent() {
        let bands = PriceBands::from_average(dec!(100000));
        assert!(bands.matches_market(dec!(104999)));
        assert!(bands.matches_market(dec!(95001)));
        assert!(!bands.matches_market(dec!(105000)));
        assert!(!bands.matches_market(dec!(95000)));
    }

    #[test]
    fn competitive_categories_cite_delta() {
        let report = recommend(&input(Categoria::BajoPromedio, dec!(88000)));
        assert!(report.narrative.starts_with("El precio está 12% por debajo"));
        assert!(!report.matches_market);
        assert_eq!(report.range_position, Some(RangePosition::Within));
    }

    #[test]
    fn promedio_is_in_range() {
        let report = recommend(&input(Categoria::Promedio, dec!(101000)));
        assert_eq!(report.narrative, NARRATIVE_EN_RANGO);
        assert!(report.matches_market);
    }

    #[test]
    fn over_market_wording_depends_on_ventajas() {
        let mut justified = input(Categoria::Premium, dec!(130000));
        justified.diferencia_pct = Some(30.0);
        justified.ventajas = 3;
        let report = recommend(&justified);
        assert!(report.narrative.contains("30% sobre el promedio"));
        assert!(report.narrative.contains("justificar el premium"));
        assert_eq!(report.range_position, Some(RangePosition::Above));

        let mut adjust = justified.clone();
        adjust.ventajas = 2;
        let report = recommend(&adjust);
        assert!(report.narrative.contains("ajuste de precio"));
        assert!(!report.narrative.contains("desventaja"));

        adjust.desventajas = 2;
        let report = recommend(&adjust);
        assert!(report.narrative.contains("2 desventaja(s)"));
    }

    #[test]
    fn missing_aggregates_route_to_insufficient_data() {
        let mut no_group = input(Categoria::Oportunidad, dec!(80000));
        no_group.aggregates = None;

        let report = recommend(&no_group);
        assert_eq!(report.bands, None);
        assert_eq!(report.narrative, NARRATIVE_SIN_DATOS);
        assert!(!report.matches_market);
    }

    #[test]
    fn rounding_keeps_whole_units() {
        let bands = rounded(&PriceBands::from_average(dec!(73519.77)));
        assert_eq!(bands.mercado, dec!(73520));
        assert_eq!(bands.venta_rapida, dec!(67638));
    }
}
