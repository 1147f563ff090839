//! Fiducia - listing interpretation core for property-search marketplaces.
//!
//! Turns per-listing analytics (price delta against comparable units, days on
//! market, typology rank, inventory, construction state) into buyer-facing
//! judgements: a fiduciary verdict with a short action, a negotiation
//! leverage score, CMA price bands, and the visibility state of each listing
//! on a filtered map.
//!
//! # Architecture
//!
//! - **`domain`** - Pure decision logic, no I/O
//!   - `fiduciary` - verdict classifier and card synthesis
//!   - `negotiation` - 0-5 buyer leverage score
//!   - `rank`, `scarcity` - typology rank labels and scarcity signals
//!   - `cma` - four-tier price ladder and narrative
//!   - `map` - filter tuple, visibility assignment, layer reconciliation
//! - **`application`** - Interpreter service composing the domain per record
//! - **`infrastructure`** - TOML configuration and logging setup
//! - **`adapter`** - The `fiducia` command-line interface
//!
//! # Example
//!
//! ```
//! use fiducia::domain::fiduciary::{synthesize, FiduciaryInput, Verdict};
//! use fiducia::domain::listing::{Categoria, MarketPosition};
//! use fiducia::domain::thresholds::GroupThresholds;
//!
//! let position = MarketPosition::new(Some(-15.0), Categoria::BajoPromedio, Some(40));
//! let card = synthesize(&FiduciaryInput::new(position, GroupThresholds::default()));
//!
//! assert_eq!(card.tipo, Verdict::Oportunidad);
//! assert_eq!(card.headline, "15% bajo mercado + 1 mes");
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
