//! Calculation logic for the PAYE Payroll Tax Engine.
//!
//! This module contains all the calculation functions for determining
//! payroll deductions, including SSNIT and tier-three contributions,
//! cash emolument and accessible income aggregation, relief totals,
//! chargeable income, graduated bracket evaluation, residency-dependent
//! tax dispatch, and the per-staff and whole-run orchestration.

mod brackets;
mod currency;
mod emoluments;
mod payroll;
mod reliefs;
mod ssnit;
mod tax_deductible;
mod tier_three;

pub use brackets::{BracketLine, ProgressiveTaxResult, calculate_progressive_tax};
pub use currency::round_currency;
pub use emoluments::{
    AccessibleIncomeResult, CashEmolumentResult, calculate_accessible_income,
    calculate_cash_emolument,
};
pub use payroll::{calculate_payroll, run_payroll};
pub use reliefs::{
    ChargeableIncomeResult, TotalReliefResult, calculate_chargeable_income, calculate_total_relief,
};
pub use ssnit::{SsnitContributionResult, calculate_ssnit};
pub use tax_deductible::{TaxDeductibleResult, calculate_tax_deductible};
pub use tier_three::{TierThreeResult, calculate_tier_three};
