//! HTTP API module for the Payroll Engine.
//!
//! This module provides the REST endpoints the payroll-run orchestrator calls
//! to tier hours, compute withholding and run payroll for a worker.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{HoursRequest, PayrollRequest, PayPeriodRequest, TaxRequest, WorkerRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
