//! Payroll Computation Engine for home-care agencies.
//!
//! This crate converts a worker's hours for a pay period into FLSA-tiered
//! hour buckets, projects gross pay, and computes payroll tax withholding
//! (federal, state, Social Security, Medicare and state disability).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
