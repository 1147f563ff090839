//! Handler for the `analyze` command.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::AnalyzeArgs;
use crate::adapter::inbound::cli::{input, output};
use crate::application::{BatchSummary, ListingInterpreter, ListingReport};
use crate::domain::fiduciary::Verdict;
use crate::domain::listing::AnalyticsRecord;
use crate::domain::money::whole;
use crate::domain::negotiation::MAX_SCORE;
use crate::domain::rank::RankStanding;
use crate::domain::thresholds::GroupThresholds;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Precio")]
    precio: String,
    #[tabled(rename = "Veredicto")]
    tipo: String,
    #[tabled(rename = "Resumen")]
    headline: String,
    #[tabled(rename = "Negociación")]
    leverage: String,
}

impl ReportRow {
    fn from_report(report: &ListingReport) -> Self {
        Self {
            id: report.id.to_string(),
            precio: report
                .precio
                .map_or_else(|| "-".to_string(), |p| whole(p).to_string()),
            tipo: report.synthesis.tipo.to_string(),
            headline: report.synthesis.headline.clone(),
            leverage: format!(
                "{}/{MAX_SCORE} {}",
                report.negotiation.score, report.negotiation.tier
            ),
        }
    }
}

/// Thresholds from flags, falling back to the configured ones.
fn resolve_thresholds(args: &AnalyzeArgs, config: &Config) -> GroupThresholds {
    GroupThresholds::new(
        args.mediana.unwrap_or(config.thresholds.dias_mediana_zona),
        args.promedio.unwrap_or(config.thresholds.dias_promedio_zona),
    )
}

/// Execute `analyze`.
pub fn execute(args: &AnalyzeArgs, config: &Config) -> Result<()> {
    let records: Vec<AnalyticsRecord> = input::read_json(&args.file)?;
    let thresholds = resolve_thresholds(args, config);
    let interpreter = ListingInterpreter::new(thresholds);
    let reports = interpreter.interpret_all(&records);
    let summary = BatchSummary::from_reports(&reports);

    if output::is_json() {
        for report in &reports {
            output::record("listing", serde_json::to_value(report)?);
        }
        output::record("summary", serde_json::to_value(&summary)?);
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Archivo", args.file.display());
    output::field(
        "Umbrales",
        format!(
            "mediana {} días, promedio {} días",
            thresholds.dias_mediana_zona, thresholds.dias_promedio_zona
        ),
    );

    if reports.is_empty() {
        output::warning("No listings in input");
        return Ok(());
    }

    let rows: Vec<ReportRow> = reports.iter().map(ReportRow::from_report).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    output::section("Listings");
    output::lines(&table.to_string());

    if output::verbosity() > 0 {
        output::section("Detalle");
        for report in &reports {
            output::field(
                &report.id.to_string(),
                format!(
                    "{} · {}",
                    output::verdict(report.synthesis.tipo),
                    output::leverage(report.negotiation.tier, report.negotiation.score)
                ),
            );
            output::note(&report.synthesis.action);
            for line in &report.synthesis.detail_lines {
                output::note(line);
            }
            if let Some(rank) = report
                .rank
                .as_ref()
                .filter(|rank| rank.standing == RankStanding::Balanced)
            {
                output::note(&rank.label);
            }
            if report.negotiation.seller_holds_position() {
                output::note(report.negotiation.headline_or_fallback());
            }
            for factor in &report.negotiation.factors {
                output::note(&format!("+ {factor}"));
            }
        }
    }

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &BatchSummary) {
    output::section("Resumen");
    output::field("Total", summary.total);
    for verdict in [
        Verdict::Oportunidad,
        Verdict::Justo,
        Verdict::Premium,
        Verdict::Sospechoso,
        Verdict::SinDatos,
    ] {
        let count = summary.count(verdict);
        if count > 0 {
            output::field(verdict.as_str(), count);
        }
    }
    output::field("Alta palanca", summary.high_leverage);
    if summary.high_leverage > 0 {
        output::hint("run `fiducia analyze -v <file>` for negotiation factors");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(mediana: Option<u32>, promedio: Option<u32>) -> AnalyzeArgs {
        AnalyzeArgs {
            file: PathBuf::from("unused.json"),
            mediana,
            promedio,
        }
    }

    #[test]
    fn flags_override_config_thresholds() {
        let config = Config::default();
        let thresholds = resolve_thresholds(&args(Some(50), None), &config);
        assert_eq!(thresholds, GroupThresholds::new(50, 104));
    }

    #[test]
    fn config_thresholds_apply_without_flags() {
        let mut config = Config::default();
        config.thresholds = GroupThresholds::new(60, 90);
        assert_eq!(
            resolve_thresholds(&args(None, None), &config),
            GroupThresholds::new(60, 90)
        );
    }
}
