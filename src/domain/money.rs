//! Monetary types for listing prices.

use rust_decimal::Decimal;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Round a price to whole currency units for display.
#[must_use]
pub fn whole(price: Price) -> Price {
    price.round_dp(0)
}
