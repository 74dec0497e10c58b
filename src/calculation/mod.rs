//! Calculation logic for the Payroll Engine.
//!
//! This module contains the pure payroll computations: FLSA hours tiering,
//! gross pay projection, tax withholding (flat-rate income tax, wage-base
//! capped Social Security, Medicare with the additional surtax, and state
//! disability), the combined payroll run, and the rounding and validation
//! rules they share.

mod gross_pay;
mod hours_tiering;
mod payroll_run;
mod rounding;
mod tax_withholding;
mod validation;

pub use gross_pay::{
    DOUBLE_TIME_MULTIPLIER, GrossPayResult, OVERTIME_MULTIPLIER, compute_gross_pay,
};
pub use hours_tiering::{
    DOUBLE_TIME_THRESHOLD, HoursTieringResult, REGULAR_HOURS_THRESHOLD, compute_hours_breakdown,
};
pub use payroll_run::{PayrollInput, calculate_payroll};
pub use rounding::{PAYROLL_DECIMAL_PLACES, round_currency, round_hours};
pub use tax_withholding::{TaxWithholdingResult, compute_taxes, medicare_tax, social_security_tax};
pub use validation::{ensure_non_negative, previous_ytd_gross};
