//! Request types for the Payroll Engine API.
//!
//! This module defines the JSON request structures for the `/payroll/*`
//! endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::PayrollInput;
use crate::models::{PayPeriod, Worker};

/// Request body for the `/payroll/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The worker being paid.
    pub worker: WorkerRequest,
    /// The pay period being paid.
    pub pay_period: PayPeriodRequest,
    /// Total hours worked in the period.
    pub total_hours: Decimal,
    /// Year-to-date gross paid before this payment.
    #[serde(default)]
    pub ytd_gross_prior: Decimal,
}

/// Worker information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerRequest {
    /// Unique identifier for the worker.
    pub id: String,
    /// The straight-time hourly rate.
    pub hourly_rate: Decimal,
}

/// Pay period information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// The date wages are paid. Defaults to the end date.
    #[serde(default)]
    pub pay_date: Option<NaiveDate>,
}

/// Request body for the `/payroll/hours` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursRequest {
    /// Total hours worked in the period.
    pub total_hours: Decimal,
}

/// Request body for the `/payroll/taxes` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRequest {
    /// Gross pay for this payment.
    pub gross_pay: Decimal,
    /// Year-to-date gross including this payment.
    pub ytd_gross: Decimal,
    /// The pay date, used to select the tax table.
    pub pay_date: NaiveDate,
}

impl From<WorkerRequest> for Worker {
    fn from(req: WorkerRequest) -> Self {
        Worker {
            id: req.id,
            hourly_rate: req.hourly_rate,
        }
    }
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
            pay_date: req.pay_date.unwrap_or(req.end_date),
        }
    }
}

impl From<PayrollRequest> for PayrollInput {
    fn from(req: PayrollRequest) -> Self {
        PayrollInput {
            worker: req.worker.into(),
            pay_period: req.pay_period.into(),
            total_hours: req.total_hours,
            ytd_gross_prior: req.ytd_gross_prior,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_payroll_request() {
        let json = r#"{
            "worker": { "id": "wkr_001", "hourly_rate": "20.00" },
            "pay_period": {
                "start_date": "2023-06-05",
                "end_date": "2023-06-11",
                "pay_date": "2023-06-16"
            },
            "total_hours": "45.5",
            "ytd_gross_prior": "12000"
        }"#;

        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.worker.id, "wkr_001");
        assert_eq!(request.total_hours, dec("45.5"));
        assert_eq!(request.ytd_gross_prior, dec("12000"));
    }

    #[test]
    fn test_ytd_defaults_to_zero() {
        let json = r#"{
            "worker": { "id": "wkr_001", "hourly_rate": "20" },
            "pay_period": { "start_date": "2023-06-05", "end_date": "2023-06-11" },
            "total_hours": "40"
        }"#;

        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.ytd_gross_prior, Decimal::ZERO);
    }

    #[test]
    fn test_pay_date_defaults_to_end_date() {
        let req = PayPeriodRequest {
            start_date: NaiveDate::from_ymd_opt(2023, 6, 5).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2023, 6, 11).unwrap(),
            pay_date: None,
        };

        let period: PayPeriod = req.into();
        assert_eq!(period.pay_date, NaiveDate::from_ymd_opt(2023, 6, 11).unwrap());
    }

    #[test]
    fn test_payroll_request_conversion() {
        let req = PayrollRequest {
            worker: WorkerRequest {
                id: "wkr_007".to_string(),
                hourly_rate: dec("21.10"),
            },
            pay_period: PayPeriodRequest {
                start_date: NaiveDate::from_ymd_opt(2023, 6, 5).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2023, 6, 11).unwrap(),
                pay_date: Some(NaiveDate::from_ymd_opt(2023, 6, 16).unwrap()),
            },
            total_hours: dec("38"),
            ytd_gross_prior: dec("500"),
        };

        let input: PayrollInput = req.into();
        assert_eq!(input.worker.id, "wkr_007");
        assert_eq!(input.worker.hourly_rate, dec("21.10"));
        assert_eq!(
            input.pay_period.pay_date,
            NaiveDate::from_ymd_opt(2023, 6, 16).unwrap()
        );
    }

    #[test]
    fn test_deserialize_tax_request() {
        let json = r#"{ "gross_pay": "1000", "ytd_gross": "1000", "pay_date": "2023-06-16" }"#;
        let request: TaxRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.gross_pay, dec("1000"));
    }
}
