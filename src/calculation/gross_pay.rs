//! Gross pay projection functionality.
//!
//! This module turns an [`HoursBreakdown`] and a straight-time hourly rate into
//! pay lines and a gross pay total.
//!
//! ## Rate Structure
//!
//! - Regular hours: 100% of the hourly rate
//! - Overtime hours: 150%
//! - Double-time hours: 200%

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{AuditStep, HoursBreakdown, PayCategory, PayLine};

use super::rounding::round_currency;
use super::validation::{checked_add, checked_mul, ensure_non_negative};

/// Multiplier applied to the hourly rate for overtime hours.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Multiplier applied to the hourly rate for double-time hours.
pub const DOUBLE_TIME_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// The result of projecting gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossPayResult {
    /// Gross pay for the period (sum of the pay line amounts).
    pub gross_pay: Decimal,
    /// One pay line per tier with hours worked in it.
    pub pay_lines: Vec<PayLine>,
    /// The audit step recording the projection.
    pub audit_step: AuditStep,
}

/// Projects gross pay from tiered hours and an hourly rate.
///
/// `gross = regular * rate + overtime * rate * 1.5 + double_time * rate * 2.0`.
/// Each tier amount is rounded to cents and gross is the sum of the rounded
/// amounts, so it always equals the pay lines exactly.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::ValidationError`] if the rate or any
/// hours bucket is negative, and [`crate::error::EngineError::CalculationError`]
/// if a pay line or the total does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{compute_gross_pay, compute_hours_breakdown};
/// use rust_decimal::Decimal;
///
/// let hours = compute_hours_breakdown(Decimal::from(50), 1).unwrap().breakdown;
/// let result = compute_gross_pay(&hours, Decimal::from(20), 2).unwrap();
///
/// assert_eq!(result.gross_pay, Decimal::from(1_100));
/// assert_eq!(result.pay_lines.len(), 2);
/// ```
pub fn compute_gross_pay(
    breakdown: &HoursBreakdown,
    hourly_rate: Decimal,
    step_number: u32,
) -> EngineResult<GrossPayResult> {
    ensure_non_negative("hourly_rate", hourly_rate)?;
    ensure_non_negative("regular_hours", breakdown.regular_hours)?;
    ensure_non_negative("overtime_hours", breakdown.overtime_hours)?;
    ensure_non_negative("double_time_hours", breakdown.double_time_hours)?;

    let tiers = [
        (PayCategory::Regular, breakdown.regular_hours, Decimal::ONE),
        (
            PayCategory::Overtime,
            breakdown.overtime_hours,
            OVERTIME_MULTIPLIER,
        ),
        (
            PayCategory::DoubleTime,
            breakdown.double_time_hours,
            DOUBLE_TIME_MULTIPLIER,
        ),
    ];

    let pay_lines = tiers
        .into_iter()
        .filter(|(_, hours, _)| *hours > Decimal::ZERO)
        .map(|(category, hours, multiplier)| {
            let rate = checked_mul("pay_rate", hourly_rate, multiplier)?;
            let amount = checked_mul("pay_line", hours, rate)?;
            Ok(PayLine {
                category,
                hours,
                rate,
                amount: round_currency(amount),
            })
        })
        .collect::<EngineResult<Vec<PayLine>>>()?;

    let gross_pay = pay_lines
        .iter()
        .try_fold(Decimal::ZERO, |total, pl| {
            checked_add("gross_pay", total, pl.amount)
        })?;

    let reasoning = if pay_lines.is_empty() {
        "No hours worked, gross pay is zero".to_string()
    } else {
        let parts: Vec<String> = pay_lines
            .iter()
            .map(|pl| {
                format!(
                    "{} hours × ${} = ${}",
                    pl.hours.normalize(),
                    pl.rate.normalize(),
                    pl.amount.normalize()
                )
            })
            .collect();
        format!("{} → gross ${}", parts.join(" + "), gross_pay.normalize())
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_pay".to_string(),
        rule_name: "Gross Pay Projection".to_string(),
        reference: "29 U.S.C. 207(a)(1); agency double-time policy".to_string(),
        input: serde_json::json!({
            "regular_hours": breakdown.regular_hours.normalize().to_string(),
            "overtime_hours": breakdown.overtime_hours.normalize().to_string(),
            "double_time_hours": breakdown.double_time_hours.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "pay_lines": pay_lines.len()
        }),
        reasoning,
    };

    Ok(GrossPayResult {
        gross_pay,
        pay_lines,
        audit_step,
    })
}
