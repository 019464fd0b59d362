//! Rounding at a fixed decimal precision.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::RoundingMode;

impl RoundingMode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::Ceil => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
        }
    }
}

/// Rounds `amount` to `decimals` places using `mode`.
///
/// Decimal arithmetic is exact, so `10.505` is a true midpoint: half-up gives
/// `10.51` and half-down gives `10.50`.
#[must_use]
pub fn round(amount: Decimal, mode: RoundingMode, decimals: u32) -> Decimal {
    amount.round_dp_with_strategy(decimals, mode.strategy())
}
