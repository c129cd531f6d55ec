//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to two decimal places, half away from zero.
///
/// All amounts that leave the engine pass through this function so that
/// repeated additions of rounded values cannot drift.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let raw = Decimal::from_str("81.155").unwrap();
/// assert_eq!(round_currency(raw), Decimal::from_str("81.16").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
