//! HTTP API module for the PAYE Payroll Tax Engine.
//!
//! This module provides the REST API endpoints for calculating payroll
//! tax for a single staff member or an entire payroll run.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, PayrollRunRequest};
pub use response::ApiError;
pub use state::AppState;
