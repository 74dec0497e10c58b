//! Configuration loading and management for the Payroll Engine.
//!
//! This module provides the [`TaxConfig`] rate table and functionality to load
//! effective-dated tax tables for a jurisdiction from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/us_default").unwrap();
//! println!("Loaded jurisdiction: {}", config.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{JurisdictionConfig, JurisdictionMetadata, RateConfig, TaxConfig};
