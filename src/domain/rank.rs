//! Intra-group ranking labels.
//!
//! The analytics provider ranks each unit by price among the units of the
//! same typology in its building. This module only interprets that rank; it
//! never re-ranks.

use serde::Serialize;

use super::error::DomainError;

/// Where a unit stands among its typology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankStanding {
    Cheapest,
    MostExpensive,
    Balanced,
}

/// 1-indexed price rank within a typology group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypologyRank {
    posicion: u32,
    total: u32,
}

impl TypologyRank {
    /// Create a rank, rejecting positions outside `1..=total`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRank`] for position zero or a position
    /// past the end of the group.
    pub fn try_new(posicion: u32, total: u32) -> Result<Self, DomainError> {
        if posicion == 0 || posicion > total {
            return Err(DomainError::InvalidRank { posicion, total });
        }
        Ok(Self { posicion, total })
    }

    /// Build from the optional analytics fields. Missing or inconsistent data
    /// yields `None`.
    #[must_use]
    pub fn from_fields(posicion: Option<u32>, total: Option<u32>) -> Option<Self> {
        Self::try_new(posicion?, total?).ok()
    }

    #[must_use]
    pub const fn posicion(&self) -> u32 {
        self.posicion
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub const fn is_cheapest(&self) -> bool {
        self.posicion == 1 && self.total > 1
    }

    #[must_use]
    pub const fn is_most_expensive(&self) -> bool {
        self.posicion == self.total && self.total > 1
    }

    #[must_use]
    pub const fn standing(&self) -> RankStanding {
        if self.is_cheapest() {
            RankStanding::Cheapest
        } else if self.is_most_expensive() {
            RankStanding::MostExpensive
        } else {
            RankStanding::Balanced
        }
    }

    /// A single-unit group carries no comparative meaning.
    #[must_use]
    pub const fn is_displayable(&self) -> bool {
        self.total >= 2
    }

    /// Display label for the rank, `None` when it should not be shown.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        if !self.is_displayable() {
            return None;
        }
        let label = match self.standing() {
            RankStanding::Cheapest => {
                format!("La más barata de {} de su tipología", self.total)
            }
            RankStanding::MostExpensive => {
                format!("La más cara de {} de su tipología", self.total)
            }
            RankStanding::Balanced => {
                format!("Puesto {} de {} en su tipología", self.posicion, self.total)
            }
        };
        Some(label)
    }
}
