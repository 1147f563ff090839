//! Application services composing the domain for callers.

pub mod interpret;

pub use interpret::{BatchSummary, ListingInterpreter, ListingReport, RankView};
