//! Scarcity signal: how many comparable units are on offer.
//!
//! Newer analytics payloads carry a structured count. Older pipelines only
//! left a free-text rationale, so [`extract_from_rationale`] scrapes the count
//! out of it on a best-effort basis. The structured field always wins.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Counts at or below this trigger a scarcity callout.
pub const SCARCITY_CALLOUT_MAX: u32 = 3;

/// Number of comparable units available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ScarcitySignal(u32);

impl ScarcitySignal {
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self(count)
    }

    #[must_use]
    pub const fn count(&self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_scarce(&self) -> bool {
        self.0 <= SCARCITY_CALLOUT_MAX
    }

    /// Prefer the structured count; fall back to parsing the rationale.
    #[must_use]
    pub fn resolve(structured: Option<u32>, rationale: Option<&str>) -> Option<Self> {
        structured
            .map(Self::new)
            .or_else(|| rationale.and_then(extract_from_rationale))
    }
}

struct RationalePatterns {
    count: Regex,
    unique: Regex,
}

fn patterns() -> &'static RationalePatterns {
    static PATTERNS: OnceLock<RationalePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| RationalePatterns {
        count: Regex::new(
            r"(?i)\b(?:de\s+solo\s+(\d+)\s+deptos?|solo\s+(\d+)\s+opci(?:o|ó)n(?:es)?)\b",
        )
        .expect("static regex compiles"),
        unique: Regex::new(r"(?i)\b(?:ú|u)nic[oa]\b").expect("static regex compiles"),
    })
}

/// Best-effort scarcity extraction from a rationale string.
///
/// Recognises "de solo N deptos", "Solo N opciones" and the "única"/"único"
/// marker (a count of one). Explicit counts win over the marker.
#[must_use]
pub fn extract_from_rationale(rationale: &str) -> Option<ScarcitySignal> {
    let patterns = patterns();

    if let Some(caps) = patterns.count.captures(rationale) {
        let count = caps
            .get(1)
            .or_else(|| caps.get(2))
            .and_then(|m| m.as_str().parse::<u32>().ok());
        if let Some(count) = count {
            tracing::trace!(count, "scarcity parsed from rationale");
            return Some(ScarcitySignal::new(count));
        }
    }

    if patterns.unique.is_match(rationale) {
        return Some(ScarcitySignal::new(1));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_de_solo_n_deptos() {
        let signal = extract_from_rationale("El más barato de solo 3 deptos en el edificio");
        assert_eq!(signal, Some(ScarcitySignal::new(3)));
    }

    #[test]
    fn parses_solo_n_opciones_case_insensitive() {
        assert_eq!(
            extract_from_rationale("Solo 2 opciones con cochera"),
            Some(ScarcitySignal::new(2))
        );
        assert_eq!(
            extract_from_rationale("solo 1 opción en la zona"),
            Some(ScarcitySignal::new(1))
        );
    }

    #[test]
    fn unique_marker_counts_as_one() {
        assert_eq!(
            extract_from_rationale("Unidad única con terraza"),
            Some(ScarcitySignal::new(1))
        );
    }

    #[test]
    fn unrelated_text_yields_none() {
        assert_eq!(extract_from_rationale("Buena ubicación, luminoso"), None);
        assert_eq!(extract_from_rationale("comunicación cercana"), None);
    }

    #[test]
    fn structured_count_wins_over_text() {
        let signal = ScarcitySignal::resolve(Some(8), Some("Solo 2 opciones"));
        assert_eq!(signal, Some(ScarcitySignal::new(8)));

        let fallback = ScarcitySignal::resolve(None, Some("Solo 2 opciones"));
        assert_eq!(fallback, Some(ScarcitySignal::new(2)));
    }

    #[test]
    fn callout_threshold_is_three() {
        assert!(ScarcitySignal::new(3).is_scarce());
        assert!(!ScarcitySignal::new(4).is_scarce());
    }
}
