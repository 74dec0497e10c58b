//! Payroll result models for the Payroll Engine.
//!
//! This module contains the [`PayrollResult`] type and its associated structures
//! that capture all outputs from a payroll run, including pay lines, tax
//! withholding, net pay, and audit traces.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HoursBreakdown, PayPeriod, TaxBreakdown};

/// Represents the pay tier of a pay line.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayCategory;
///
/// let category = PayCategory::Overtime;
/// assert_eq!(format!("{:?}", category), "Overtime");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCategory {
    /// Straight-time hours (first 40).
    Regular,
    /// Overtime hours at 150% (hours 40 to 60).
    Overtime,
    /// Double-time hours at 200% (beyond 60).
    DoubleTime,
}

/// Represents a single earnings line in a payroll result.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayLine, PayCategory};
/// use rust_decimal::Decimal;
///
/// let pay_line = PayLine {
///     category: PayCategory::Regular,
///     hours: Decimal::from(40),
///     rate: Decimal::from(20),
///     amount: Decimal::from(800),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLine {
    /// The pay tier this line belongs to.
    pub category: PayCategory,
    /// The number of hours paid in this tier.
    pub hours: Decimal,
    /// The hourly rate for this tier (base rate times tier multiplier).
    pub rate: Decimal,
    /// The amount for this line, rounded to cents.
    pub amount: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The statute or policy the rule implements.
    pub reference: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag conditions a payroll reviewer may want to look at; they never
/// stop the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a payroll run.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a payroll run for one worker and pay period.
///
/// `gross_pay` equals the sum of `pay_lines` amounts and
/// `net_pay == gross_pay - total_withholding`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the worker being paid.
    pub worker_id: String,
    /// The pay period for this calculation.
    pub pay_period: PayPeriod,
    /// Code of the jurisdiction whose tax table was applied.
    pub jurisdiction: String,
    /// The tiered hours.
    pub hours: HoursBreakdown,
    /// Earnings lines, one per non-empty tier.
    pub pay_lines: Vec<PayLine>,
    /// Total gross pay for the period.
    pub gross_pay: Decimal,
    /// Tax withheld from this payment.
    pub taxes: TaxBreakdown,
    /// Sum of all tax lines.
    pub total_withholding: Decimal,
    /// Gross pay less withholding.
    pub net_pay: Decimal,
    /// Year-to-date gross including this payment.
    pub ytd_gross: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_pay_line(category: PayCategory, amount: &str) -> PayLine {
        PayLine {
            category,
            hours: dec("10"),
            rate: dec("20"),
            amount: dec(amount),
        }
    }

    #[test]
    fn test_gross_pay_equals_sum_of_pay_lines() {
        let pay_lines = vec![
            create_sample_pay_line(PayCategory::Regular, "800.00"),
            create_sample_pay_line(PayCategory::Overtime, "300.00"),
        ];
        let gross: Decimal = pay_lines.iter().map(|pl| pl.amount).sum();

        let taxes = TaxBreakdown {
            federal_tax: dec("132.00"),
            state_tax: dec("44.00"),
            social_security_tax: dec("68.20"),
            medicare_tax: dec("15.95"),
            state_disability_tax: dec("5.50"),
        };

        let result = PayrollResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            worker_id: "wkr_001".to_string(),
            pay_period: PayPeriod {
                start_date: NaiveDate::from_ymd_opt(2023, 6, 5).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2023, 6, 11).unwrap(),
                pay_date: NaiveDate::from_ymd_opt(2023, 6, 16).unwrap(),
            },
            jurisdiction: "US-DEFAULT".to_string(),
            hours: HoursBreakdown {
                regular_hours: dec("40"),
                overtime_hours: dec("10"),
                double_time_hours: dec("0"),
            },
            pay_lines,
            gross_pay: gross,
            taxes,
            total_withholding: taxes.total(),
            net_pay: gross - taxes.total(),
            ytd_gross: gross,
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![],
                duration_us: 0,
            },
        };

        let sum: Decimal = result.pay_lines.iter().map(|pl| pl.amount).sum();
        assert_eq!(result.gross_pay, sum);
        assert_eq!(result.net_pay, dec("834.35"));
    }

    #[test]
    fn test_pay_category_serialization() {
        assert_eq!(
            serde_json::to_string(&PayCategory::Regular).unwrap(),
            "\"regular\""
        );
        assert_eq!(
            serde_json::to_string(&PayCategory::DoubleTime).unwrap(),
            "\"double_time\""
        );
    }

    #[test]
    fn test_pay_category_deserialization() {
        let category: PayCategory = serde_json::from_str("\"overtime\"").unwrap();
        assert_eq!(category, PayCategory::Overtime);
    }

    #[test]
    fn test_pay_line_serialization() {
        let pay_line = create_sample_pay_line(PayCategory::DoubleTime, "400.00");
        let json = serde_json::to_string(&pay_line).unwrap();
        assert!(json.contains("\"category\":\"double_time\""));
        assert!(json.contains("\"amount\":\"400.00\""));
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "hours_tiering".to_string(),
            rule_name: "FLSA Hours Tiering".to_string(),
            reference: "29 U.S.C. 207(a)".to_string(),
            input: serde_json::json!({"total_hours": "45"}),
            output: serde_json::json!({"regular_hours": "40"}),
            reasoning: "45 hours exceeds 40".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"step_number\":1"));
        assert!(json.contains("\"rule_id\":\"hours_tiering\""));
        assert!(json.contains("\"reference\":\"29 U.S.C. 207(a)\""));
    }

    #[test]
    fn test_audit_warning_serialization() {
        let warning = AuditWarning {
            code: "DOUBLE_TIME_WORKED".to_string(),
            message: "10 hours paid at double time".to_string(),
            severity: "medium".to_string(),
        };

        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"DOUBLE_TIME_WORKED\""));
        assert!(json.contains("\"severity\":\"medium\""));
    }
}
