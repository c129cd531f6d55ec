//! Core data models for the PAYE Payroll Tax Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod ledger;
mod payroll_result;
mod rates;
mod salary_band;
mod staff;

pub use ledger::{PaymentDetail, StaffLedger};
pub use payroll_result::{
    AuditStep, AuditTrace, AuditWarning, PayrollBreakdown, PayrollCalculationResult,
    PayrollRunResult,
};
pub use rates::OrganizationRates;
pub use salary_band::{BenefitPackage, SalaryBand};
pub use staff::{ResidencyStatus, StaffProfile};
