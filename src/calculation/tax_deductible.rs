//! Residency-dependent tax dispatch.
//!
//! Non-resident, part-time, and casual staff pay a flat fraction of their
//! chargeable income; resident full-time staff are assessed on the
//! graduated schedule.

use rust_decimal::Decimal;

use crate::config::TaxConfig;
use crate::models::{AuditStep, ResidencyStatus};

use super::brackets::calculate_progressive_tax;
use super::currency::round_currency;

/// The result of the tax deductible calculation.
#[derive(Debug, Clone)]
pub struct TaxDeductibleResult {
    /// The assessed tax, rounded to currency and never negative.
    pub amount: Decimal,
    /// The audit steps recording this calculation (one for the dispatch,
    /// plus the bracket evaluation step for full-time residents).
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the tax deductible for a chargeable income under the given
/// residency classification.
///
/// Flat-rate categories are clamped to zero tax when the chargeable income
/// is negative; the graduated schedule yields zero naturally in that case.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_tax_deductible;
/// use paye_engine::config::ConfigLoader;
/// use paye_engine::models::ResidencyStatus;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/gh_paye").unwrap();
/// let result = calculate_tax_deductible(
///     Decimal::from_str("10000").unwrap(),
///     ResidencyStatus::NonResident,
///     loader.config(),
///     1,
/// );
/// assert_eq!(result.amount, Decimal::from_str("2500.00").unwrap());
/// ```
pub fn calculate_tax_deductible(
    chargeable_income: Decimal,
    residency_status: ResidencyStatus,
    config: &TaxConfig,
    step_number: u32,
) -> TaxDeductibleResult {
    match config.flat_rate(residency_status) {
        Some(rate) => {
            let base = chargeable_income.max(Decimal::ZERO);
            let amount = round_currency(base * rate);

            let audit_step = AuditStep {
                step_number,
                rule_id: "flat_rate_tax".to_string(),
                rule_name: "Flat Rate Tax".to_string(),
                statute_ref: "Act 896 First Sch. para 8".to_string(),
                input: serde_json::json!({
                    "chargeable_income": chargeable_income.normalize().to_string(),
                    "residency_status": residency_status,
                    "rate": rate.normalize().to_string(),
                }),
                output: serde_json::json!({
                    "tax_deductible": amount.normalize().to_string(),
                }),
                reasoning: format!(
                    "GHS {} x {} = GHS {}",
                    base.normalize(),
                    rate.normalize(),
                    amount.normalize()
                ),
            };

            TaxDeductibleResult {
                amount,
                audit_steps: vec![audit_step],
            }
        }
        None => {
            let result =
                calculate_progressive_tax(chargeable_income, config.brackets(), step_number);
            TaxDeductibleResult {
                amount: result.tax,
                audit_steps: vec![result.audit_step],
            }
        }
    }
}
