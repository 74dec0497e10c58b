//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type used to define the calculation
//! context for a payroll run.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Represents a pay period with its date range and pay date.
///
/// The pay date, not the work dates, decides which tax year (and therefore
/// which tax table and which YTD totals) a payment belongs to.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let pay_period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2023, 12, 18).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
///     pay_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
/// };
///
/// assert!(pay_period.contains_date(NaiveDate::from_ymd_opt(2023, 12, 20).unwrap()));
/// assert_eq!(pay_period.tax_year(), 2024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// The date wages are paid.
    pub pay_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the calendar year the payment is taxed in.
    pub fn tax_year(&self) -> i32 {
        self.pay_date.year()
    }

    /// Returns true if the period's dates are internally consistent.
    pub fn is_well_formed(&self) -> bool {
        self.start_date <= self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_pay_period() -> PayPeriod {
        PayPeriod {
            start_date: date(2023, 6, 5),
            end_date: date(2023, 6, 18),
            pay_date: date(2023, 6, 23),
        }
    }

    #[test]
    fn test_contains_date_within_period() {
        let period = create_pay_period();
        assert!(period.contains_date(date(2023, 6, 10)));
    }

    #[test]
    fn test_contains_date_is_inclusive() {
        let period = create_pay_period();
        assert!(period.contains_date(date(2023, 6, 5)));
        assert!(period.contains_date(date(2023, 6, 18)));
        assert!(!period.contains_date(date(2023, 6, 4)));
        assert!(!period.contains_date(date(2023, 6, 19)));
    }

    #[test]
    fn test_tax_year_follows_pay_date() {
        let period = PayPeriod {
            start_date: date(2023, 12, 18),
            end_date: date(2023, 12, 31),
            pay_date: date(2024, 1, 5),
        };
        assert_eq!(period.tax_year(), 2024);
    }

    #[test]
    fn test_is_well_formed() {
        assert!(create_pay_period().is_well_formed());

        let inverted = PayPeriod {
            start_date: date(2023, 6, 18),
            end_date: date(2023, 6, 5),
            pay_date: date(2023, 6, 23),
        };
        assert!(!inverted.is_well_formed());
    }

    #[test]
    fn test_serialization_round_trip() {
        let period = create_pay_period();
        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"pay_date\":\"2023-06-23\""));

        let deserialized: PayPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, period);
    }
}
