//! Hours and tax breakdown value types.
//!
//! These are the two outputs of the payroll computation: the FLSA-tiered
//! split of a worker's hours and the five-line tax withholding breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A worker's total hours split into pay tiers.
///
/// Every bucket is non-negative and rounded to 2 decimal places.
/// `regular_hours` never exceeds 40 and `overtime_hours` never exceeds 20.
///
/// # Example
///
/// ```
/// use payroll_engine::models::HoursBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = HoursBreakdown {
///     regular_hours: Decimal::from(40),
///     overtime_hours: Decimal::from(5),
///     double_time_hours: Decimal::ZERO,
/// };
/// assert_eq!(breakdown.total_hours(), Decimal::from(45));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursBreakdown {
    /// Hours paid at the straight-time rate (at most 40).
    pub regular_hours: Decimal,
    /// Hours paid at 1.5x (at most 20).
    pub overtime_hours: Decimal,
    /// Hours paid at 2.0x (everything past 60).
    pub double_time_hours: Decimal,
}

impl HoursBreakdown {
    /// A breakdown with no hours in any tier.
    pub const ZERO: HoursBreakdown = HoursBreakdown {
        regular_hours: Decimal::ZERO,
        overtime_hours: Decimal::ZERO,
        double_time_hours: Decimal::ZERO,
    };

    /// Returns the sum of all three tiers.
    pub fn total_hours(&self) -> Decimal {
        self.regular_hours + self.overtime_hours + self.double_time_hours
    }
}

/// Tax withheld from a single payment.
///
/// Each line is a non-negative currency amount rounded to 2 decimal places.
/// Net pay is derived by the caller as `gross_pay - total()`.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TaxBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let taxes = TaxBreakdown {
///     federal_tax: Decimal::from(120),
///     state_tax: Decimal::from(40),
///     social_security_tax: Decimal::from(62),
///     medicare_tax: Decimal::from_str("14.50").unwrap(),
///     state_disability_tax: Decimal::from(5),
/// };
/// assert_eq!(taxes.total(), Decimal::from_str("241.50").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Flat-rate federal income tax withholding.
    pub federal_tax: Decimal,
    /// Flat-rate state income tax withholding.
    pub state_tax: Decimal,
    /// Employee Social Security (OASDI) tax, capped at the annual wage base.
    pub social_security_tax: Decimal,
    /// Employee Medicare tax including any additional Medicare surtax.
    pub medicare_tax: Decimal,
    /// State disability insurance contribution.
    pub state_disability_tax: Decimal,
}

impl TaxBreakdown {
    /// A breakdown with nothing withheld.
    pub const ZERO: TaxBreakdown = TaxBreakdown {
        federal_tax: Decimal::ZERO,
        state_tax: Decimal::ZERO,
        social_security_tax: Decimal::ZERO,
        medicare_tax: Decimal::ZERO,
        state_disability_tax: Decimal::ZERO,
    };

    /// Returns the total amount withheld across all five lines.
    pub fn total(&self) -> Decimal {
        self.federal_tax
            + self.state_tax
            + self.social_security_tax
            + self.medicare_tax
            + self.state_disability_tax
    }
}
