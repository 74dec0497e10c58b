//! Payroll run for a single worker and pay period.
//!
//! Chains hours tiering, gross pay projection and tax withholding against the
//! tax table effective on the pay date, and assembles a [`PayrollResult`]
//! with its audit trace.

use std::time::Instant;

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditTrace, AuditWarning, PayPeriod, PayrollResult, Worker};

use super::gross_pay::compute_gross_pay;
use super::hours_tiering::compute_hours_breakdown;
use super::tax_withholding::compute_taxes;
use super::validation::{checked_add, ensure_non_negative};

/// Everything needed to run payroll for one worker and one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// The worker being paid.
    pub worker: Worker,
    /// The pay period being paid.
    pub pay_period: PayPeriod,
    /// Total hours worked in the period.
    pub total_hours: Decimal,
    /// Year-to-date gross paid before this payment.
    pub ytd_gross_prior: Decimal,
}

/// Runs payroll for one worker and pay period.
///
/// # Errors
///
/// - [`EngineError::ValidationError`] for negative hours, rate or prior YTD,
///   or a pay period that ends before it starts
/// - [`EngineError::RateNotFound`] if no tax table covers the pay date
///
/// # Example
///
/// ```no_run
/// use payroll_engine::calculation::{calculate_payroll, PayrollInput};
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::{PayPeriod, Worker};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::load("./config/us_default")?;
/// let input = PayrollInput {
///     worker: Worker { id: "wkr_001".to_string(), hourly_rate: Decimal::from(20) },
///     pay_period: PayPeriod {
///         start_date: NaiveDate::from_ymd_opt(2023, 6, 5).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2023, 6, 11).unwrap(),
///         pay_date: NaiveDate::from_ymd_opt(2023, 6, 16).unwrap(),
///     },
///     total_hours: Decimal::from(50),
///     ytd_gross_prior: Decimal::ZERO,
/// };
///
/// let result = calculate_payroll(&input, &config)?;
/// assert_eq!(result.gross_pay, Decimal::from(1_100));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn calculate_payroll(
    input: &PayrollInput,
    config: &ConfigLoader,
) -> EngineResult<PayrollResult> {
    let start_time = Instant::now();

    if !input.pay_period.is_well_formed() {
        return Err(EngineError::validation(
            "pay_period",
            format!(
                "start date {} is after end date {}",
                input.pay_period.start_date, input.pay_period.end_date
            ),
        ));
    }
    ensure_non_negative("ytd_gross_prior", input.ytd_gross_prior)?;

    let tax_config = config.get_tax_config(input.pay_period.pay_date)?;

    let mut audit_steps = Vec::new();
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;

    let tiering = compute_hours_breakdown(input.total_hours, step_number)?;
    let hours = tiering.breakdown;
    audit_steps.push(tiering.audit_step);
    step_number += 1;

    let gross = compute_gross_pay(&hours, input.worker.hourly_rate, step_number)?;
    audit_steps.push(gross.audit_step);
    step_number += 1;

    let gross_pay = gross.gross_pay;
    let ytd_gross = checked_add("ytd_gross", input.ytd_gross_prior, gross_pay)?;

    let withholding = compute_taxes(gross_pay, ytd_gross, tax_config, step_number)?;
    audit_steps.extend(withholding.audit_steps);

    let tax_year = input.pay_period.tax_year();
    if input.pay_period.end_date.year() != tax_year {
        warnings.push(AuditWarning {
            code: "PAY_DATE_IN_DIFFERENT_TAX_YEAR".to_string(),
            message: format!(
                "Work ending {} is paid on {} and taxed in {}; ytd_gross_prior must be {} year-to-date",
                input.pay_period.end_date, input.pay_period.pay_date, tax_year, tax_year
            ),
            severity: "medium".to_string(),
        });
    }

    if hours.double_time_hours > Decimal::ZERO {
        warnings.push(AuditWarning {
            code: "DOUBLE_TIME_WORKED".to_string(),
            message: format!(
                "{} hours paid at double time (over {} hours in the period)",
                hours.double_time_hours.normalize(),
                super::DOUBLE_TIME_THRESHOLD
            ),
            severity: "medium".to_string(),
        });
    }

    if withholding.wage_base_reached {
        warnings.push(AuditWarning {
            code: "SOCIAL_SECURITY_WAGE_BASE_REACHED".to_string(),
            message: format!(
                "YTD gross ${} has reached the ${} Social Security wage base",
                ytd_gross.normalize(),
                tax_config.social_security_wage_base.normalize()
            ),
            severity: "low".to_string(),
        });
    }

    if withholding.additional_medicare_applied {
        warnings.push(AuditWarning {
            code: "ADDITIONAL_MEDICARE_APPLIED".to_string(),
            message: format!(
                "YTD gross ${} exceeds the ${} additional Medicare threshold",
                ytd_gross.normalize(),
                tax_config.medicare_additional_threshold.normalize()
            ),
            severity: "low".to_string(),
        });
    }

    let total_withholding = withholding.breakdown.total();
    let net_pay = gross_pay - total_withholding;
    let duration_us = start_time.elapsed().as_micros() as u64;

    tracing::debug!(
        worker_id = %input.worker.id,
        gross_pay = %gross_pay,
        net_pay = %net_pay,
        warnings = warnings.len(),
        "Payroll calculated"
    );

    Ok(PayrollResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        worker_id: input.worker.id.clone(),
        pay_period: input.pay_period.clone(),
        jurisdiction: config.jurisdiction().code.clone(),
        hours,
        pay_lines: gross.pay_lines,
        gross_pay,
        taxes: withholding.breakdown,
        total_withholding,
        net_pay,
        ytd_gross,
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings,
            duration_us,
        },
    })
}
