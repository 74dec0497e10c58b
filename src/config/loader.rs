//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading jurisdiction
//! tax tables from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{JurisdictionConfig, JurisdictionMetadata, RateConfig, TaxConfig};

/// Loads and provides access to a jurisdiction's tax configuration.
///
/// # Directory Structure
///
/// ```text
/// config/us_default/
/// ├── jurisdiction.yaml    # Jurisdiction metadata
/// └── rates/
///     ├── 2023-01-01.yaml  # Tax table effective from this pay date
///     └── 2024-01-01.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/us_default").unwrap();
/// let pay_date = NaiveDate::from_ymd_opt(2023, 8, 4).unwrap();
/// let tax = loader.get_tax_config(pay_date).unwrap();
/// println!("Social Security wage base: ${}", tax.social_security_wage_base);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: JurisdictionConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails if any required file is missing, contains invalid YAML, or
    /// holds a rate table that does not pass [`TaxConfig::validate`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let jurisdiction_path = path.join("jurisdiction.yaml");
        let metadata = Self::load_yaml::<JurisdictionMetadata>(&jurisdiction_path)?;

        let rates_dir = path.join("rates");
        let rates = Self::load_rates(&rates_dir)?;

        tracing::debug!(
            jurisdiction = %metadata.code,
            rate_tables = rates.len(),
            "Loaded tax configuration"
        );

        Ok(Self {
            config: JurisdictionConfig::new(metadata, rates),
        })
    }

    /// Builds a loader around an already assembled configuration.
    pub fn from_config(config: JurisdictionConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads and validates all rate files from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateConfig>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let rate_config = Self::load_yaml::<RateConfig>(&path)?;
                rate_config
                    .tax
                    .validate()
                    .map_err(|e| EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    })?;
                rates.push(rate_config);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rates)
    }

    /// Returns the underlying jurisdiction configuration.
    pub fn config(&self) -> &JurisdictionConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.config.jurisdiction()
    }

    /// Gets the tax table in effect on the given pay date.
    ///
    /// Picks the most recent rate configuration effective on or before
    /// `pay_date`, or returns [`EngineError::RateNotFound`].
    pub fn get_tax_config(&self, pay_date: NaiveDate) -> EngineResult<&TaxConfig> {
        self.config
            .rates()
            .iter()
            .rev()
            .find(|rc| rc.effective_date <= pay_date)
            .map(|rc| &rc.tax)
            .ok_or(EngineError::RateNotFound { date: pay_date })
    }
}
