//! Rounding rules for payroll amounts.
//!
//! Every hour bucket and every currency amount the engine produces is rounded
//! to 2 decimal places with midpoints rounded away from zero (0.005 -> 0.01).
//! Banker's rounding is never used.

use rust_decimal::{Decimal, RoundingStrategy};

/// The number of decimal places kept for hours and currency.
pub const PAYROLL_DECIMAL_PLACES: u32 = 2;

/// Rounds a currency amount to cents, half away from zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("14.505").unwrap()), Decimal::from_str("14.51").unwrap());
/// assert_eq!(round_currency(Decimal::from_str("14.495").unwrap()), Decimal::from_str("14.50").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        PAYROLL_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Rounds an hours figure to hundredths of an hour, half away from zero.
pub fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(
        PAYROLL_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    )
}
