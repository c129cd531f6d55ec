//! Per-staff payroll calculation and whole-run orchestration.
//!
//! `calculate_payroll` is the engine's core operation: a pure function from
//! (staff profile, salary band, organization rates, tax config) to a full
//! monetary breakdown. `run_payroll` applies it to every staff member in a
//! ledger, all-or-nothing.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::TaxConfig;
use crate::error::PayrollResult;
use crate::models::{
    AuditStep, AuditTrace, OrganizationRates, PayrollBreakdown, PayrollCalculationResult,
    PayrollRunResult, StaffLedger,
};

use super::currency::round_currency;
use super::emoluments::{calculate_accessible_income, calculate_cash_emolument};
use super::reliefs::{calculate_chargeable_income, calculate_total_relief};
use super::ssnit::calculate_ssnit;
use super::tax_deductible::calculate_tax_deductible;
use super::tier_three::calculate_tier_three;

/// Calculates the payroll tax breakdown for one staff member.
///
/// Resolves the staff profile and payment detail from the ledger, validates
/// the organization rates, then runs the deduction pipeline: SSNIT and
/// tier-three contributions, cash emolument, accessible income, reliefs,
/// chargeable income, residency-dependent tax, and the final tax payable
/// (bonus income + tax deductible + externally supplied overtime tax).
///
/// The function is deterministic apart from the generated calculation id
/// and timestamp: identical inputs always produce an identical breakdown.
///
/// # Errors
///
/// * [`crate::error::PayrollError::StaffNotFound`] - unknown staff id
/// * [`crate::error::PayrollError::PaymentDetailNotFound`] - staff has no
///   salary band association
/// * [`crate::error::PayrollError::InvalidRate`] - a negative rate input
pub fn calculate_payroll(
    ledger: &StaffLedger,
    staff_id: &str,
    rates: &OrganizationRates,
    config: &TaxConfig,
) -> PayrollResult<PayrollCalculationResult> {
    let start_time = Instant::now();

    let staff = ledger.staff(staff_id)?;
    let detail = ledger.payment_detail(staff_id)?;
    rates.validate()?;

    let band = &detail.salary_band;
    let basic_salary = round_currency(band.amount);
    let benefits = band.benefits();

    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    let ssnit = calculate_ssnit(
        basic_salary,
        rates.ssnit_rate,
        config.ssnit_fallback(),
        step_number,
    );
    audit_steps.push(ssnit.audit_step.clone());
    step_number += 1;

    let tier_three = calculate_tier_three(basic_salary, rates.tier_three_rate, step_number);
    audit_steps.push(tier_three.audit_step.clone());
    step_number += 1;

    let emolument = calculate_cash_emolument(
        basic_salary,
        benefits.cash_allowance,
        benefits.excess_bonus,
        step_number,
    );
    audit_steps.push(emolument.audit_step.clone());
    step_number += 1;

    let accessible = calculate_accessible_income(
        emolument.amount,
        benefits.vehicle_elements,
        benefits.non_cash_benefits,
        step_number,
    );
    audit_steps.push(accessible.audit_step.clone());
    step_number += 1;

    let relief = calculate_total_relief(
        ssnit.amount,
        tier_three.amount,
        benefits.deductible_relief,
        step_number,
    );
    audit_steps.push(relief.audit_step.clone());
    step_number += 1;

    let chargeable = calculate_chargeable_income(
        accessible.amount,
        relief.amount,
        benefits.cash_allowance,
        step_number,
    );
    audit_steps.push(chargeable.audit_step.clone());
    step_number += 1;

    let tax = calculate_tax_deductible(
        chargeable.amount,
        staff.residency_status,
        config,
        step_number,
    );
    audit_steps.extend(tax.audit_steps.iter().cloned());

    let tax_payable = benefits.bonus_income + tax.amount + detail.overtime_tax;

    let breakdown = PayrollBreakdown {
        basic_salary,
        total_cash_emolument: round_currency(emolument.amount),
        ssnit_amount: ssnit.amount,
        tier_three_amount: tier_three.amount,
        cash_allowance: round_currency(benefits.cash_allowance),
        bonus_income: round_currency(benefits.bonus_income),
        excess_bonus: round_currency(benefits.excess_bonus),
        vehicle_elements: round_currency(benefits.vehicle_elements),
        non_cash_benefits: round_currency(benefits.non_cash_benefits),
        accessible_income: round_currency(accessible.amount),
        deductible_relief: round_currency(benefits.deductible_relief),
        total_relief: round_currency(relief.amount),
        chargeable_income: round_currency(chargeable.amount),
        tax_deductible: tax.amount,
        tax_payable: round_currency(tax_payable),
    };

    Ok(PayrollCalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        staff_id: staff_id.to_string(),
        breakdown,
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings: vec![],
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}

/// Runs payroll for every staff member in the ledger.
///
/// The run is atomic: the first failing staff member aborts the whole run
/// and nothing is returned. A payroll run either covers everyone or does
/// not exist.
///
/// Entries come back in staff identifier order, with `total_basic` and
/// `total_chargeable_income` aggregated across the run.
///
/// # Errors
///
/// Propagates the first per-staff error encountered.
pub fn run_payroll(
    ledger: &StaffLedger,
    rates: &OrganizationRates,
    config: &TaxConfig,
) -> PayrollResult<PayrollRunResult> {
    let mut entries = Vec::with_capacity(ledger.len());
    let mut total_basic = Decimal::ZERO;
    let mut total_chargeable_income = Decimal::ZERO;

    for staff in ledger.staff_members() {
        let result = calculate_payroll(ledger, &staff.id, rates, config)?;
        total_basic += result.breakdown.basic_salary;
        total_chargeable_income += result.breakdown.chargeable_income;
        entries.push(result);
    }

    Ok(PayrollRunResult {
        run_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        total_basic,
        total_chargeable_income,
        entries,
    })
}
