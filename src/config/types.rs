//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the tax jurisdiction.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionMetadata {
    /// Short code for the jurisdiction (e.g., "US-DEFAULT").
    pub code: String,
    /// The human-readable name of the jurisdiction.
    pub name: String,
    /// The version of the rate set.
    pub version: String,
    /// URL to the authoritative rate publication.
    pub source_url: String,
}

/// The withholding rate table applied to a payment.
///
/// Rates are fractions (0.062 means 6.2%). The table is immutable once
/// loaded and is passed to the tax calculation by reference.
///
/// # Example
///
/// ```
/// use payroll_engine::config::TaxConfig;
/// use rust_decimal::Decimal;
///
/// let config = TaxConfig::standard();
/// assert_eq!(config.social_security_wage_base, Decimal::from(160_200));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxConfig {
    /// Flat federal income tax withholding rate.
    pub federal_withholding_rate: Decimal,
    /// Flat state income tax withholding rate.
    pub state_withholding_rate: Decimal,
    /// Employee Social Security rate.
    pub social_security_rate: Decimal,
    /// Employee Medicare rate (uncapped).
    pub medicare_rate: Decimal,
    /// State disability insurance rate (uncapped).
    pub state_disability_rate: Decimal,
    /// Annual wages subject to Social Security tax.
    pub social_security_wage_base: Decimal,
    /// Additional Medicare surtax rate.
    pub medicare_additional_rate: Decimal,
    /// YTD wages above which the additional Medicare surtax applies.
    pub medicare_additional_threshold: Decimal,
}

impl TaxConfig {
    /// Returns the default rate table.
    pub fn standard() -> Self {
        Self {
            federal_withholding_rate: Decimal::new(12, 2),
            state_withholding_rate: Decimal::new(4, 2),
            social_security_rate: Decimal::new(62, 3),
            medicare_rate: Decimal::new(145, 4),
            state_disability_rate: Decimal::new(5, 3),
            social_security_wage_base: Decimal::from(160_200),
            medicare_additional_rate: Decimal::new(9, 3),
            medicare_additional_threshold: Decimal::from(200_000),
        }
    }

    /// Checks that every rate is a fraction in `[0, 1]` and that the wage
    /// base and surtax threshold are not negative.
    pub fn validate(&self) -> EngineResult<()> {
        let rates = [
            ("federal_withholding_rate", self.federal_withholding_rate),
            ("state_withholding_rate", self.state_withholding_rate),
            ("social_security_rate", self.social_security_rate),
            ("medicare_rate", self.medicare_rate),
            ("state_disability_rate", self.state_disability_rate),
            ("medicare_additional_rate", self.medicare_additional_rate),
        ];
        for (field, rate) in rates {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(EngineError::validation(
                    field,
                    format!("rate {} must be between 0 and 1", rate),
                ));
            }
        }

        let amounts = [
            ("social_security_wage_base", self.social_security_wage_base),
            (
                "medicare_additional_threshold",
                self.medicare_additional_threshold,
            ),
        ];
        for (field, amount) in amounts {
            if amount < Decimal::ZERO {
                return Err(EngineError::validation(
                    field,
                    format!("amount {} must not be negative", amount),
                ));
            }
        }

        Ok(())
    }
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// A rate table together with the date it takes effect.
#[derive(Debug, Clone, Deserialize)]
pub struct RateConfig {
    /// The first pay date these rates apply to.
    pub effective_date: NaiveDate,
    /// The withholding rates.
    pub tax: TaxConfig,
}

/// The complete jurisdiction configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct JurisdictionConfig {
    /// Jurisdiction metadata.
    metadata: JurisdictionMetadata,
    /// Rate configurations by effective date (sorted oldest first).
    rates: Vec<RateConfig>,
}

impl JurisdictionConfig {
    /// Creates a new JurisdictionConfig from its component parts.
    pub fn new(metadata: JurisdictionMetadata, rates: Vec<RateConfig>) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            rates: sorted_rates,
        }
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns all rate configurations, oldest first.
    pub fn rates(&self) -> &[RateConfig] {
        &self.rates
    }
}
