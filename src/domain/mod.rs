//! Listing interpretation domain logic.
//!
//! Everything in here is pure and synchronous: no I/O, no shared state, safe
//! to call from any thread.

pub mod cma;
pub mod error;
pub mod fiduciary;
pub mod id;
pub mod listing;
pub mod map;
pub mod money;
pub mod negotiation;
pub mod rank;
pub mod scarcity;
pub mod thresholds;

pub use error::DomainError;
pub use fiduciary::{synthesize, FiduciaryInput, FiduciarySynthesis, Verdict};
pub use id::ListingId;
pub use listing::{AnalyticsRecord, Categoria, ConstructionState, MarketPosition};
pub use money::Price;
pub use negotiation::{assess, LeverageTier, NegotiationAssessment, NegotiationInput};
pub use rank::{RankStanding, TypologyRank};
pub use scarcity::ScarcitySignal;
pub use thresholds::GroupThresholds;
