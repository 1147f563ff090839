//! CMA price bands and narrative.

use fiducia::domain::cma::{
    recommend, rounded, CmaInput, PriceBands, RangePosition, NARRATIVE_EN_RANGO,
    NARRATIVE_SIN_DATOS,
};
use fiducia::domain::listing::Categoria;
use fiducia::testkit::domain::aggregates;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn input(precio: Decimal, categoria: Categoria, ventajas: usize) -> CmaInput {
    CmaInput {
        aggregates: Some(aggregates(dec!(200000))),
        precio,
        categoria,
        diferencia_pct: Some(12.4),
        ventajas,
        desventajas: 0,
    }
}

#[test]
fn bands_are_ordered_for_non_negative_averages() {
    for promedio in [dec!(0), dec!(1), dec!(99999.99), dec!(250000), dec!(12345678.9)] {
        let bands = PriceBands::from_average(promedio);
        assert!(bands.is_ordered(), "promedio {promedio}");
        assert!(rounded(&bands).is_ordered(), "rounded promedio {promedio}");
    }
}

#[test]
fn zero_average_yields_zero_bands() {
    let bands = PriceBands::from_average(Decimal::ZERO);
    assert_eq!(bands.venta_rapida, Decimal::ZERO);
    assert_eq!(bands.premium, Decimal::ZERO);
}

#[test]
fn report_carries_group_context() {
    let report = recommend(&input(dec!(205000), Categoria::Promedio, 0));

    let bands = report.bands.expect("bands");
    assert_eq!(bands.mercado, dec!(200000));
    assert_eq!(bands.competitivo, dec!(194000));
    assert!(report.matches_market);
    assert_eq!(report.range_position, Some(RangePosition::Within));
    assert_eq!(report.narrative, NARRATIVE_EN_RANGO);
}

#[test]
fn price_outside_tolerance_does_not_match_market() {
    let report = recommend(&input(dec!(215000), Categoria::SobrePromedio, 0));
    assert!(!report.matches_market);
    assert!(report.narrative.starts_with("El precio está 12% sobre el promedio"));
    assert!(report.narrative.contains("ajuste de precio"));
}

#[test]
fn enough_differentiators_justify_premium() {
    let justified = recommend(&input(dec!(260000), Categoria::Premium, 3));
    let borderline = recommend(&input(dec!(260000), Categoria::Premium, 2));

    assert_eq!(justified.range_position, Some(RangePosition::Above));
    assert!(justified.narrative.contains("3 ventajas diferenciales"));
    assert!(!borderline.narrative.contains("ventajas diferenciales"));
}

#[test]
fn missing_aggregates_read_as_insufficient_data() {
    let report = recommend(&CmaInput {
        aggregates: None,
        ..input(dec!(100000), Categoria::Oportunidad, 0)
    });
    assert!(report.bands.is_none());
    assert!(report.range_position.is_none());
    assert_eq!(report.narrative, NARRATIVE_SIN_DATOS);
}
