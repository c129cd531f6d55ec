//! Payroll calculation result models.
//!
//! This module contains the [`PayrollCalculationResult`] type and its
//! associated structures that capture all outputs from a payroll tax
//! calculation, including the monetary breakdown and audit traces.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The monetary breakdown produced for one staff member.
///
/// Every field is a currency amount rounded to two decimal places with
/// round-half-up semantics. The following identities hold exactly:
///
/// * `total_relief == ssnit_amount + tier_three_amount + deductible_relief`
/// * `accessible_income == total_cash_emolument + vehicle_elements + non_cash_benefits`
/// * `chargeable_income == accessible_income - total_relief - cash_allowance`
///
/// `chargeable_income` is the only field that may be negative (when reliefs
/// exceed accessible income); tax is clamped to zero in that case but the
/// negative chargeable figure is kept for transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// The base monthly salary from the staff member's salary band.
    pub basic_salary: Decimal,
    /// Basic salary plus cash allowance and excess bonus.
    pub total_cash_emolument: Decimal,
    /// SSNIT pension contribution deducted from the basic salary.
    pub ssnit_amount: Decimal,
    /// Supplementary tier-three pension contribution.
    pub tier_three_amount: Decimal,
    /// Cash allowance component of the benefit package.
    pub cash_allowance: Decimal,
    /// Bonus income taxed separately and added to the tax payable.
    pub bonus_income: Decimal,
    /// Bonus in excess of the statutory threshold.
    pub excess_bonus: Decimal,
    /// Value of vehicle benefit elements.
    pub vehicle_elements: Decimal,
    /// Value of non-cash benefits.
    pub non_cash_benefits: Decimal,
    /// Total income accessible for taxation before reliefs.
    pub accessible_income: Decimal,
    /// Relief amount deductible from the chargeable base.
    pub deductible_relief: Decimal,
    /// Sum of all reliefs (SSNIT, tier three, deductible relief).
    pub total_relief: Decimal,
    /// The income on which tax is assessed.
    pub chargeable_income: Decimal,
    /// Income tax assessed on the chargeable income.
    pub tax_deductible: Decimal,
    /// Total tax payable to the revenue authority.
    pub tax_payable: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statutory provision for this rule.
    pub statute_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation process for
/// transparency and compliance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a payroll tax calculation for one staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollCalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced this result.
    pub engine_version: String,
    /// The staff member this calculation applies to.
    pub staff_id: String,
    /// The monetary breakdown.
    pub breakdown: PayrollBreakdown,
    /// The complete audit trace.
    pub audit_trace: AuditTrace,
}

/// The result of a payroll run across an organization's staff.
///
/// A run is atomic: either every staff member calculated successfully and
/// appears in `entries`, or the run as a whole failed and nothing is
/// returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRunResult {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced this run.
    pub engine_version: String,
    /// Sum of basic salaries across all staff in the run.
    pub total_basic: Decimal,
    /// Sum of chargeable incomes across all staff in the run.
    pub total_chargeable_income: Decimal,
    /// The per-staff calculation results, in staff identifier order.
    pub entries: Vec<PayrollCalculationResult>,
}
