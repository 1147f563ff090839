//! Handler for the `cma` command.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::CmaArgs;
use crate::adapter::inbound::cli::{input, output};
use crate::domain::cma::{recommend, rounded, CmaInput, PriceBands, RangePosition};
use crate::domain::money::{whole, Price};
use crate::error::Result;

#[derive(Tabled)]
struct BandRow {
    #[tabled(rename = "Banda")]
    name: &'static str,
    #[tabled(rename = "Precio")]
    price: String,
}

fn band_rows(bands: &PriceBands) -> Vec<BandRow> {
    let row = |name, price: Price| BandRow {
        name,
        price: price.to_string(),
    };
    vec![
        row("Venta rápida", bands.venta_rapida),
        row("Competitivo", bands.competitivo),
        row("Mercado", bands.mercado),
        row("Premium", bands.premium),
    ]
}

fn range_label(position: RangePosition) -> &'static str {
    match position {
        RangePosition::Below => "debajo del rango del grupo",
        RangePosition::Within => "dentro del rango del grupo",
        RangePosition::Above => "encima del rango del grupo",
    }
}

/// Execute `cma`.
pub fn execute(args: &CmaArgs) -> Result<()> {
    let cma_input: CmaInput = input::read_json(&args.file)?;
    let report = recommend(&cma_input);

    if output::is_json() {
        output::record("cma", serde_json::to_value(&report)?);
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Precio", whole(report.precio));
    output::field("Categoría", cma_input.categoria);

    match report.bands {
        Some(bands) => {
            let mut table = Table::new(band_rows(&rounded(&bands)));
            table.with(Style::rounded());
            output::section("Bandas de precio");
            output::lines(&table.to_string());

            if let Some(position) = report.range_position {
                output::field("Rango", range_label(position));
            }
            if let Some(mediana) = report.precio_mediana {
                output::field("Mediana", whole(mediana));
            }
            if let Some(dias) = report.dias_promedio {
                output::field("Días prom.", dias.round_dp(0));
            }
            if report.matches_market {
                output::success("Precio alineado con el mercado");
            }
        }
        None => output::warning("Sin grupo comparable"),
    }

    output::section("Recomendación");
    output::lines(&report.narrative);
    Ok(())
}
