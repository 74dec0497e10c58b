//! Payroll tax withholding functionality.
//!
//! This module computes the five employee-side withholdings for a single
//! payment: flat-rate federal and state income tax, Social Security (capped at
//! the annual wage base), Medicare (with the additional surtax above the annual
//! threshold) and state disability insurance.
//!
//! The year-to-date figure passed in always **includes** the payment being
//! taxed. The YTD before the payment is reconstructed as `ytd - gross` and is
//! what the wage base and surtax threshold are tested against.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TaxConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, TaxBreakdown};

use super::rounding::round_currency;
use super::validation::previous_ytd_gross;

/// The result of computing tax withholding for one payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxWithholdingResult {
    /// The five withholding lines.
    pub breakdown: TaxBreakdown,
    /// Year-to-date gross before this payment.
    pub prev_ytd_gross: Decimal,
    /// True once YTD wages (including this payment) reach the wage base.
    pub wage_base_reached: bool,
    /// True if any part of this payment is subject to the Medicare surtax.
    pub additional_medicare_applied: bool,
    /// One audit step per withholding line, in breakdown order.
    pub audit_steps: Vec<AuditStep>,
}

#[derive(Debug, Clone, Copy)]
struct SocialSecurityPortion {
    taxable_wages: Decimal,
    tax: Decimal,
}

#[derive(Debug, Clone, Copy)]
struct MedicarePortion {
    base: Decimal,
    additional_wages: Decimal,
    additional: Decimal,
}

impl MedicarePortion {
    fn total(&self) -> Decimal {
        self.base + self.additional
    }
}

fn social_security_portion(
    gross_pay: Decimal,
    prev_ytd_gross: Decimal,
    config: &TaxConfig,
) -> SocialSecurityPortion {
    if prev_ytd_gross >= config.social_security_wage_base {
        return SocialSecurityPortion {
            taxable_wages: Decimal::ZERO,
            tax: Decimal::ZERO,
        };
    }

    let remaining_base = config.social_security_wage_base - prev_ytd_gross;
    let taxable_wages = gross_pay.min(remaining_base);

    SocialSecurityPortion {
        taxable_wages,
        tax: round_currency(taxable_wages * config.social_security_rate),
    }
}

fn medicare_portion(
    gross_pay: Decimal,
    prev_ytd_gross: Decimal,
    ytd_gross: Decimal,
    config: &TaxConfig,
) -> MedicarePortion {
    let base = round_currency(gross_pay * config.medicare_rate);
    let threshold = config.medicare_additional_threshold;

    let additional_wages = if ytd_gross <= threshold {
        Decimal::ZERO
    } else if prev_ytd_gross >= threshold {
        gross_pay
    } else {
        ytd_gross - threshold
    };

    let additional = if additional_wages > Decimal::ZERO {
        round_currency(additional_wages * config.medicare_additional_rate)
    } else {
        Decimal::ZERO
    };

    MedicarePortion {
        base,
        additional_wages,
        additional,
    }
}

/// Computes the Social Security tax on a payment.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::social_security_tax;
/// use payroll_engine::config::TaxConfig;
/// use rust_decimal::Decimal;
///
/// let config = TaxConfig::standard();
/// // Only $500 of this payment is under the $160,200 wage base.
/// let tax = social_security_tax(Decimal::from(1_000), Decimal::from(160_700), &config).unwrap();
/// assert_eq!(tax, Decimal::from(31));
/// ```
pub fn social_security_tax(
    gross_pay: Decimal,
    ytd_gross: Decimal,
    config: &TaxConfig,
) -> EngineResult<Decimal> {
    let prev_ytd_gross = previous_ytd_gross(gross_pay, ytd_gross)?;
    Ok(social_security_portion(gross_pay, prev_ytd_gross, config).tax)
}

/// Computes the Medicare tax on a payment, base plus any additional surtax.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::medicare_tax;
/// use payroll_engine::config::TaxConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = TaxConfig::standard();
/// let tax = medicare_tax(Decimal::from(5_000), Decimal::from(202_000), &config).unwrap();
/// assert_eq!(tax, Decimal::from_str("90.50").unwrap());
/// ```
pub fn medicare_tax(
    gross_pay: Decimal,
    ytd_gross: Decimal,
    config: &TaxConfig,
) -> EngineResult<Decimal> {
    let prev_ytd_gross = previous_ytd_gross(gross_pay, ytd_gross)?;
    Ok(medicare_portion(gross_pay, prev_ytd_gross, ytd_gross, config).total())
}

/// Computes all withholding for a single payment.
///
/// # Arguments
///
/// * `gross_pay` - Gross pay for this payment
/// * `ytd_gross` - Year-to-date gross **including** this payment
/// * `config` - The tax table to apply
/// * `step_number_start` - The starting step number for audit trail sequencing
///
/// # Errors
///
/// Returns [`crate::error::EngineError::ValidationError`] if either amount is
/// negative or `ytd_gross` is smaller than `gross_pay`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_taxes;
/// use payroll_engine::config::TaxConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = TaxConfig::standard();
/// let result = compute_taxes(Decimal::from(1_000), Decimal::from(1_000), &config, 1).unwrap();
///
/// assert_eq!(result.breakdown.federal_tax, Decimal::from(120));
/// assert_eq!(result.breakdown.state_tax, Decimal::from(40));
/// assert_eq!(result.breakdown.social_security_tax, Decimal::from(62));
/// assert_eq!(result.breakdown.medicare_tax, Decimal::from_str("14.5").unwrap());
/// assert_eq!(result.breakdown.state_disability_tax, Decimal::from(5));
/// ```
pub fn compute_taxes(
    gross_pay: Decimal,
    ytd_gross: Decimal,
    config: &TaxConfig,
    step_number_start: u32,
) -> EngineResult<TaxWithholdingResult> {
    let prev_ytd_gross = previous_ytd_gross(gross_pay, ytd_gross)?;
    let mut step_number = step_number_start;
    let mut audit_steps = Vec::with_capacity(5);

    let gross_str = gross_pay.normalize().to_string();

    // Flat-rate lines
    let federal_tax = round_currency(gross_pay * config.federal_withholding_rate);
    audit_steps.push(flat_rate_step(
        step_number,
        "federal_withholding",
        "Federal Income Tax Withholding",
        "IRS Publication 15-T (flat percentage)",
        gross_pay,
        config.federal_withholding_rate,
        federal_tax,
    ));
    step_number += 1;

    let state_tax = round_currency(gross_pay * config.state_withholding_rate);
    audit_steps.push(flat_rate_step(
        step_number,
        "state_withholding",
        "State Income Tax Withholding",
        "State withholding schedule (flat percentage)",
        gross_pay,
        config.state_withholding_rate,
        state_tax,
    ));
    step_number += 1;

    // Social Security, capped at the wage base
    let social_security = social_security_portion(gross_pay, prev_ytd_gross, config);
    let ss_reasoning = if prev_ytd_gross >= config.social_security_wage_base {
        format!(
            "Prior YTD ${} already at or above ${} wage base, no Social Security tax",
            prev_ytd_gross.normalize(),
            config.social_security_wage_base.normalize()
        )
    } else if social_security.taxable_wages < gross_pay {
        format!(
            "Payment crosses ${} wage base: only ${} of ${} taxable × {} = ${}",
            config.social_security_wage_base.normalize(),
            social_security.taxable_wages.normalize(),
            gross_str,
            config.social_security_rate.normalize(),
            social_security.tax.normalize()
        )
    } else {
        format!(
            "${} × {} = ${}",
            gross_str,
            config.social_security_rate.normalize(),
            social_security.tax.normalize()
        )
    };
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "social_security".to_string(),
        rule_name: "Social Security Tax".to_string(),
        reference: "26 U.S.C. 3101(a), 3121(a)(1)".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_str,
            "prev_ytd_gross": prev_ytd_gross.normalize().to_string(),
            "wage_base": config.social_security_wage_base.normalize().to_string(),
            "rate": config.social_security_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "taxable_wages": social_security.taxable_wages.normalize().to_string(),
            "amount": social_security.tax.normalize().to_string()
        }),
        reasoning: ss_reasoning,
    });
    step_number += 1;

    // Medicare, with the additional surtax above the threshold
    let medicare = medicare_portion(gross_pay, prev_ytd_gross, ytd_gross, config);
    let medicare_reasoning = if medicare.additional_wages.is_zero() {
        format!(
            "${} × {} = ${}; YTD ${} does not exceed ${} surtax threshold",
            gross_str,
            config.medicare_rate.normalize(),
            medicare.base.normalize(),
            ytd_gross.normalize(),
            config.medicare_additional_threshold.normalize()
        )
    } else {
        format!(
            "${} × {} = ${} base plus ${} above ${} threshold × {} = ${} surtax",
            gross_str,
            config.medicare_rate.normalize(),
            medicare.base.normalize(),
            medicare.additional_wages.normalize(),
            config.medicare_additional_threshold.normalize(),
            config.medicare_additional_rate.normalize(),
            medicare.additional.normalize()
        )
    };
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "medicare".to_string(),
        rule_name: "Medicare Tax".to_string(),
        reference: "26 U.S.C. 3101(b)".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_str,
            "ytd_gross": ytd_gross.normalize().to_string(),
            "rate": config.medicare_rate.normalize().to_string(),
            "additional_rate": config.medicare_additional_rate.normalize().to_string(),
            "additional_threshold": config.medicare_additional_threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "base": medicare.base.normalize().to_string(),
            "additional_wages": medicare.additional_wages.normalize().to_string(),
            "additional": medicare.additional.normalize().to_string(),
            "amount": medicare.total().normalize().to_string()
        }),
        reasoning: medicare_reasoning,
    });
    step_number += 1;

    let state_disability_tax = round_currency(gross_pay * config.state_disability_rate);
    audit_steps.push(flat_rate_step(
        step_number,
        "state_disability",
        "State Disability Insurance",
        "State disability insurance (uncapped)",
        gross_pay,
        config.state_disability_rate,
        state_disability_tax,
    ));

    Ok(TaxWithholdingResult {
        breakdown: TaxBreakdown {
            federal_tax,
            state_tax,
            social_security_tax: social_security.tax,
            medicare_tax: medicare.total(),
            state_disability_tax,
        },
        prev_ytd_gross,
        wage_base_reached: ytd_gross >= config.social_security_wage_base,
        additional_medicare_applied: !medicare.additional_wages.is_zero(),
        audit_steps,
    })
}

fn flat_rate_step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    reference: &str,
    gross_pay: Decimal,
    rate: Decimal,
    amount: Decimal,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        reference: reference.to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "rate": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "${} × {} = ${}",
            gross_pay.normalize(),
            rate.normalize(),
            amount.normalize()
        ),
    }
}
