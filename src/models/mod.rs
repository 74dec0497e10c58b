//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod calculation_result;
mod pay_period;
mod worker;

pub use breakdown::{HoursBreakdown, TaxBreakdown};
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, PayCategory, PayLine, PayrollResult,
};
pub use pay_period::PayPeriod;
pub use worker::Worker;
