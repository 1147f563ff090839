//! Zone time-on-market thresholds.

use serde::{Deserialize, Serialize};

/// Days-on-market reference points for a result set.
///
/// Passed explicitly into every call so the same core serves markets with
/// different medians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupThresholds {
    /// Median days on market in the zone.
    #[serde(default = "default_dias_mediana_zona")]
    pub dias_mediana_zona: u32,

    /// Mean days on market in the zone.
    #[serde(default = "default_dias_promedio_zona")]
    pub dias_promedio_zona: u32,
}

const fn default_dias_mediana_zona() -> u32 {
    74
}

const fn default_dias_promedio_zona() -> u32 {
    104
}

impl GroupThresholds {
    #[must_use]
    pub const fn new(dias_mediana_zona: u32, dias_promedio_zona: u32) -> Self {
        Self {
            dias_mediana_zona,
            dias_promedio_zona,
        }
    }

    /// Fill missing values with the zone defaults.
    #[must_use]
    pub fn from_optional(mediana: Option<u32>, promedio: Option<u32>) -> Self {
        Self {
            dias_mediana_zona: mediana.unwrap_or_else(default_dias_mediana_zona),
            dias_promedio_zona: promedio.unwrap_or_else(default_dias_promedio_zona),
        }
    }

    /// Whether `mediana < promedio`, which the classifier assumes.
    #[must_use]
    pub const fn is_ordered(&self) -> bool {
        self.dias_mediana_zona < self.dias_promedio_zona
    }
}

impl Default for GroupThresholds {
    fn default() -> Self {
        Self {
            dias_mediana_zona: default_dias_mediana_zona(),
            dias_promedio_zona: default_dias_promedio_zona(),
        }
    }
}
