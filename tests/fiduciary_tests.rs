//! Verdict and card synthesis over analytics records.

use fiducia::application::ListingInterpreter;
use fiducia::domain::fiduciary::{
    classify, synthesize, FiduciaryInput, Verdict, ACTION_OPORTUNIDAD_PREVENTA,
    ACTION_PREMIUM_FRESH, ACTION_PREMIUM_STALE, ACTION_SIN_DATOS, ACTION_SOSPECHOSO,
    DETAIL_PREVENTA,
};
use fiducia::domain::listing::{Categoria, ConstructionState, MarketPosition};
use fiducia::domain::thresholds::GroupThresholds;
use fiducia::testkit::domain::record;

fn card(delta: Option<f64>, dias: Option<u32>) -> FiduciaryInput {
    FiduciaryInput::new(
        MarketPosition::new(delta, Categoria::Promedio, dias),
        GroupThresholds::default(),
    )
}

#[test]
fn fresh_bargain_reads_as_opportunity() {
    let synthesis = synthesize(&card(Some(-15.0), Some(40)));
    assert_eq!(synthesis.tipo, Verdict::Oportunidad);
    assert_eq!(synthesis.headline, "15% bajo mercado + 1 mes");
}

#[test]
fn aged_deep_bargain_reads_as_suspicious() {
    let synthesis = synthesize(&card(Some(-25.0), Some(110)));
    assert_eq!(synthesis.tipo, Verdict::Sospechoso);
    assert_eq!(synthesis.action, ACTION_SOSPECHOSO);
}

#[test]
fn missing_delta_takes_no_data_path() {
    let synthesis = synthesize(&card(None, Some(0)));
    assert_eq!(synthesis.tipo, Verdict::SinDatos);
    assert_eq!(synthesis.action, ACTION_SIN_DATOS);
    assert_ne!(synthesis.tipo, Verdict::Justo);

    let aged = synthesize(&card(None, Some(95)));
    assert_eq!(aged.headline, "3 meses publicado");
    assert_eq!(aged.action, ACTION_SIN_DATOS);
}

#[test]
fn over_market_is_never_a_bargain() {
    let thresholds = GroupThresholds::default();
    for delta in [10, 11, 25, 80] {
        for dias in [0, 30, 74, 104, 400] {
            let verdict = classify(delta, dias, &thresholds);
            assert_eq!(verdict, Verdict::Premium, "delta {delta} dias {dias}");
        }
    }
}

#[test]
fn premium_action_depends_on_median() {
    let stale = synthesize(&card(Some(12.0), Some(74)));
    let fresh = synthesize(&card(Some(12.0), Some(73)));
    assert_eq!(stale.action, ACTION_PREMIUM_STALE);
    assert_eq!(fresh.action, ACTION_PREMIUM_FRESH);
    assert_eq!(fresh.headline, "12% sobre mercado + 2 meses");
}

#[test]
fn half_percent_rounds_up_into_the_band() {
    // -9.5 rounds to -9, inside the fair band.
    let synthesis = synthesize(&card(Some(-9.5), Some(10)));
    assert_eq!(synthesis.tipo, Verdict::Justo);
    assert_eq!(synthesis.headline, "Precio de mercado + reciente");

    // 9.5 rounds to 10, premium.
    assert_eq!(synthesize(&card(Some(9.5), Some(10))).tipo, Verdict::Premium);
}

#[test]
fn synthesis_is_deterministic() {
    let input = card(Some(-21.0), Some(80));
    assert_eq!(synthesize(&input), synthesize(&input));
}

#[test]
fn interpreter_builds_full_cards() {
    let mut presale = record("7", Some(-12.0), Some(20));
    presale.estado_construccion = ConstructionState::Preventa;
    presale.razon = Some("Es la única de 2 ambientes en el edificio".to_string());
    presale.posicion_en_tipologia = Some(1);
    presale.unidades_misma_tipologia = Some(4);

    let report = ListingInterpreter::default().interpret(&presale);

    assert_eq!(report.synthesis.tipo, Verdict::Oportunidad);
    assert_eq!(report.synthesis.action, ACTION_OPORTUNIDAD_PREVENTA);
    assert_eq!(
        report.synthesis.detail_lines,
        vec![
            "Solo 1 similar disponible".to_string(),
            DETAIL_PREVENTA.to_string(),
            "La más barata de 4 de su tipología".to_string(),
        ]
    );
    let rank = report.rank.expect("rank view");
    assert_eq!(rank.posicion, 1);
    assert_eq!(rank.total, 4);
}

#[test]
fn interpreter_uses_its_own_thresholds() {
    // 60 days is past a 50-day median but not the default 74.
    let listing = record("8", Some(-22.0), Some(60));
    let default = ListingInterpreter::default().interpret(&listing);
    let strict = ListingInterpreter::new(GroupThresholds::new(50, 90)).interpret(&listing);

    assert_eq!(default.synthesis.tipo, Verdict::Oportunidad);
    assert_eq!(strict.synthesis.tipo, Verdict::Sospechoso);
}
