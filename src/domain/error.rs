//! Domain validation errors for core domain types.
//!
//! The interpretation functions themselves never fail: every missing input has
//! a documented default or an explicit no-data branch. These errors are only
//! returned by `try_new`-style constructors that validate caller-built values.
//!
//! # Examples
//!
//! ```
//! use fiducia::domain::error::DomainError;
//! use fiducia::domain::rank::TypologyRank;
//!
//! // Position zero is not a valid 1-indexed rank
//! let result = TypologyRank::try_new(0, 3);
//!
//! assert!(matches!(result, Err(DomainError::InvalidRank { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Rank position must be 1-indexed and within the group size.
    #[error("rank position {posicion} is outside 1..={total}")]
    InvalidRank {
        /// The 1-indexed position that was provided.
        posicion: u32,
        /// The group size that was provided.
        total: u32,
    },

    /// A bounded price range must have `min <= max`.
    #[error("price range minimum {min} is greater than maximum {max}")]
    InvertedPriceRange {
        /// Lower bound.
        min: rust_decimal::Decimal,
        /// Upper bound.
        max: rust_decimal::Decimal,
    },

    /// Price bounds must not be negative.
    #[error("price bound must be non-negative, got {value}")]
    NegativePrice {
        /// The invalid bound.
        value: rust_decimal::Decimal,
    },
}
