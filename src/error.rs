//! Error types for the PAYE Payroll Tax Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the PAYE Payroll Tax Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use paye_engine::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No staff profile exists for the given identifier.
    #[error("Staff not found: {staff_id}")]
    StaffNotFound {
        /// The staff identifier that could not be resolved.
        staff_id: String,
    },

    /// A staff member has no payment detail (salary band association).
    #[error("No payment detail found for staff '{staff_id}'")]
    PaymentDetailNotFound {
        /// The staff identifier without a salary band association.
        staff_id: String,
    },

    /// A statutory rate input was negative.
    #[error("Invalid rate for '{field}': {value} (rates must be non-negative)")]
    InvalidRate {
        /// The rate field that was invalid.
        field: String,
        /// The offending value.
        value: Decimal,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
