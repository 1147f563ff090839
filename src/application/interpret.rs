//! Listing interpretation service.
//!
//! Composes the fiduciary classifier, the negotiation scorer and the typology
//! ranker over analytics records. Holds only the thresholds for the result
//! set, so one interpreter can be shared freely across threads.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::fiduciary::{synthesize, FiduciaryInput, FiduciarySynthesis, Verdict};
use crate::domain::id::ListingId;
use crate::domain::listing::AnalyticsRecord;
use crate::domain::money::Price;
use crate::domain::negotiation::{assess, NegotiationAssessment, NegotiationInput};
use crate::domain::rank::{RankStanding, TypologyRank};
use crate::domain::scarcity::ScarcitySignal;
use crate::domain::thresholds::GroupThresholds;

/// Rank details as rendered next to the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankView {
    pub posicion: u32,
    pub total: u32,
    pub standing: RankStanding,
    pub label: String,
}

impl RankView {
    fn from_rank(rank: TypologyRank) -> Option<Self> {
        let label = rank.label()?;
        Some(Self {
            posicion: rank.posicion(),
            total: rank.total(),
            standing: rank.standing(),
            label,
        })
    }
}

/// Everything the card needs for one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingReport {
    pub id: ListingId,
    pub precio: Option<Price>,
    pub synthesis: FiduciarySynthesis,
    pub negotiation: NegotiationAssessment,
    pub rank: Option<RankView>,
}

/// Verdict counts over a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub by_verdict: BTreeMap<&'static str, usize>,
    pub high_leverage: usize,
}

impl BatchSummary {
    #[must_use]
    pub fn from_reports(reports: &[ListingReport]) -> Self {
        let mut summary = Self {
            total: reports.len(),
            ..Self::default()
        };
        for report in reports {
            *summary
                .by_verdict
                .entry(report.synthesis.tipo.as_str())
                .or_default() += 1;
            if report.negotiation.score >= 4 {
                summary.high_leverage += 1;
            }
        }
        summary
    }

    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.by_verdict.get(verdict.as_str()).copied().unwrap_or(0)
    }
}

/// Interprets analytics records against one set of zone thresholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingInterpreter {
    thresholds: GroupThresholds,
}

impl ListingInterpreter {
    #[must_use]
    pub const fn new(thresholds: GroupThresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub const fn thresholds(&self) -> &GroupThresholds {
        &self.thresholds
    }

    /// Interpret a single record.
    #[must_use]
    pub fn interpret(&self, record: &AnalyticsRecord) -> ListingReport {
        let rank = record.typology_rank();
        let scarcity = ScarcitySignal::resolve(record.escasez, record.razon.as_deref());

        let input = FiduciaryInput::new(record.market_position(), self.thresholds)
            .with_scarcity(scarcity)
            .with_preventa(record.estado_construccion.is_preventa())
            .with_rank(rank);

        let synthesis = synthesize(&input);
        let negotiation = assess(
            &NegotiationInput::from(record),
            self.thresholds.dias_mediana_zona,
        );

        debug!(
            listing_id = %record.id,
            tipo = %synthesis.tipo,
            score = negotiation.score,
            tier = %negotiation.tier,
            "listing interpreted"
        );

        ListingReport {
            id: record.id.clone(),
            precio: record.precio,
            synthesis,
            negotiation,
            rank: rank.and_then(RankView::from_rank),
        }
    }

    /// Interpret a batch, preserving input order.
    #[must_use]
    pub fn interpret_all(&self, records: &[AnalyticsRecord]) -> Vec<ListingReport> {
        let reports: Vec<ListingReport> = records.iter().map(|r| self.interpret(r)).collect();
        let summary = BatchSummary::from_reports(&reports);

        info!(
            total = summary.total,
            oportunidad = summary.count(Verdict::Oportunidad),
            sospechoso = summary.count(Verdict::Sospechoso),
            sin_datos = summary.count(Verdict::SinDatos),
            high_leverage = summary.high_leverage,
            "batch interpreted"
        );

        reports
    }
}
