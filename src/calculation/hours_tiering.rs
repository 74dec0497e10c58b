//! FLSA hours tiering functionality.
//!
//! This module splits a worker's total hours for a pay period into regular,
//! overtime and double-time buckets.
//!
//! ## Tier Structure
//!
//! - First 40 hours: regular (FLSA, 29 U.S.C. 207(a)(1))
//! - Hours 40 to 60: overtime at 150%
//! - Beyond 60 hours: double time at 200% (agency policy, not federal law)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{AuditStep, HoursBreakdown};

use super::rounding::round_hours;
use super::validation::ensure_non_negative;

/// Hours up to this threshold are paid at the regular rate.
pub const REGULAR_HOURS_THRESHOLD: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Hours beyond this threshold are paid at double time.
pub const DOUBLE_TIME_THRESHOLD: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// The result of tiering a pay period's hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursTieringResult {
    /// The tiered hours.
    pub breakdown: HoursBreakdown,
    /// The audit step recording the split.
    pub audit_step: AuditStep,
}

/// Splits total hours worked into regular, overtime and double-time hours.
///
/// Each bucket is rounded independently to 2 decimal places, half away from
/// zero. There is no upper bound on `total_hours`.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::ValidationError`] if `total_hours` is negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_hours_breakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = compute_hours_breakdown(Decimal::from(70), 1).unwrap();
/// assert_eq!(result.breakdown.regular_hours, Decimal::from(40));
/// assert_eq!(result.breakdown.overtime_hours, Decimal::from(20));
/// assert_eq!(result.breakdown.double_time_hours, Decimal::from(10));
///
/// let result = compute_hours_breakdown(Decimal::from_str("45.125").unwrap(), 1).unwrap();
/// assert_eq!(result.breakdown.overtime_hours, Decimal::from_str("5.13").unwrap());
/// ```
pub fn compute_hours_breakdown(
    total_hours: Decimal,
    step_number: u32,
) -> EngineResult<HoursTieringResult> {
    ensure_non_negative("total_hours", total_hours)?;

    let (regular, overtime, double_time) = if total_hours <= REGULAR_HOURS_THRESHOLD {
        (total_hours, Decimal::ZERO, Decimal::ZERO)
    } else if total_hours <= DOUBLE_TIME_THRESHOLD {
        (
            REGULAR_HOURS_THRESHOLD,
            total_hours - REGULAR_HOURS_THRESHOLD,
            Decimal::ZERO,
        )
    } else {
        (
            REGULAR_HOURS_THRESHOLD,
            DOUBLE_TIME_THRESHOLD - REGULAR_HOURS_THRESHOLD,
            total_hours - DOUBLE_TIME_THRESHOLD,
        )
    };

    let breakdown = HoursBreakdown {
        regular_hours: round_hours(regular),
        overtime_hours: round_hours(overtime),
        double_time_hours: round_hours(double_time),
    };

    let reasoning = if total_hours <= REGULAR_HOURS_THRESHOLD {
        format!(
            "{} hours is within the {} hour regular threshold, no overtime",
            total_hours.normalize(),
            REGULAR_HOURS_THRESHOLD
        )
    } else if total_hours <= DOUBLE_TIME_THRESHOLD {
        format!(
            "{} hours exceeds {} hours: {} regular, {} overtime at 150%",
            total_hours.normalize(),
            REGULAR_HOURS_THRESHOLD,
            breakdown.regular_hours.normalize(),
            breakdown.overtime_hours.normalize()
        )
    } else {
        format!(
            "{} hours exceeds {} hours: {} regular, {} overtime at 150%, {} double time at 200%",
            total_hours.normalize(),
            DOUBLE_TIME_THRESHOLD,
            breakdown.regular_hours.normalize(),
            breakdown.overtime_hours.normalize(),
            breakdown.double_time_hours.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "hours_tiering".to_string(),
        rule_name: "FLSA Hours Tiering".to_string(),
        reference: "29 U.S.C. 207(a)(1); agency double-time policy".to_string(),
        input: serde_json::json!({
            "total_hours": total_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "regular_hours": breakdown.regular_hours.normalize().to_string(),
            "overtime_hours": breakdown.overtime_hours.normalize().to_string(),
            "double_time_hours": breakdown.double_time_hours.normalize().to_string()
        }),
        reasoning,
    };

    Ok(HoursTieringResult {
        breakdown,
        audit_step,
    })
}
