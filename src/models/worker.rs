//! Worker model.
//!
//! A worker is the caregiver (or office staff member) being paid. The payroll
//! computation only needs the identifier and the hourly rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a worker being paid for a pay period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Worker;
/// use rust_decimal::Decimal;
///
/// let worker = Worker {
///     id: "wkr_001".to_string(),
///     hourly_rate: Decimal::from(20),
/// };
/// assert_eq!(worker.overtime_rate(), Decimal::from(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique identifier for the worker.
    pub id: String,
    /// The straight-time hourly rate.
    pub hourly_rate: Decimal,
}

impl Worker {
    /// Returns the hourly rate for overtime hours (1.5x).
    pub fn overtime_rate(&self) -> Decimal {
        self.hourly_rate * crate::calculation::OVERTIME_MULTIPLIER
    }

    /// Returns the hourly rate for double-time hours (2.0x).
    pub fn double_time_rate(&self) -> Decimal {
        self.hourly_rate * crate::calculation::DOUBLE_TIME_MULTIPLIER
    }
}
