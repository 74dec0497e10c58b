//! Input validation for payroll calculations.
//!
//! Negative hours, negative money and a year-to-date figure smaller than the
//! payment it includes are all rejected with [`EngineError::ValidationError`].
//! Arithmetic on caller-sized values goes through the checked helpers here.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Returns `value` unchanged if it is zero or positive.
pub fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::validation(
            field,
            format!("{} must not be negative", value.normalize()),
        ));
    }
    Ok(value)
}

/// Multiplies two amounts, failing instead of overflowing.
pub(crate) fn checked_mul(operation: &str, lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| EngineError::overflow(operation))
}

/// Adds two amounts, failing instead of overflowing.
pub(crate) fn checked_add(operation: &str, lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_add(rhs)
        .ok_or_else(|| EngineError::overflow(operation))
}

/// Backs the current payment out of a year-to-date total.
///
/// `ytd_gross` includes `gross_pay`, so the YTD figure before this payment is
/// `ytd_gross - gross_pay`. That figure must not be negative.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::previous_ytd_gross;
/// use rust_decimal::Decimal;
///
/// let prev = previous_ytd_gross(Decimal::from(1_000), Decimal::from(159_700)).unwrap();
/// assert_eq!(prev, Decimal::from(158_700));
///
/// assert!(previous_ytd_gross(Decimal::from(1_000), Decimal::from(500)).is_err());
/// ```
pub fn previous_ytd_gross(gross_pay: Decimal, ytd_gross: Decimal) -> EngineResult<Decimal> {
    ensure_non_negative("gross_pay", gross_pay)?;
    ensure_non_negative("ytd_gross", ytd_gross)?;

    if ytd_gross < gross_pay {
        return Err(EngineError::validation(
            "ytd_gross",
            format!(
                "year-to-date gross {} is less than the payment {} it includes",
                ytd_gross.normalize(),
                gross_pay.normalize()
            ),
        ));
    }

    Ok(ytd_gross - gross_pay)
}
