//! Relief aggregation and chargeable income.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of the total relief calculation.
#[derive(Debug, Clone)]
pub struct TotalReliefResult {
    /// Sum of SSNIT, tier three, and deductible relief.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the total relief deducted from the chargeable base.
///
/// All three components arrive already rounded to currency, so the sum is
/// exact and `total_relief == ssnit + tier_three + deductible_relief` holds
/// as a Decimal identity.
pub fn calculate_total_relief(
    ssnit_amount: Decimal,
    tier_three_amount: Decimal,
    deductible_relief: Decimal,
    step_number: u32,
) -> TotalReliefResult {
    let amount = ssnit_amount + tier_three_amount + deductible_relief;

    let audit_step = AuditStep {
        step_number,
        rule_id: "total_relief".to_string(),
        rule_name: "Total Relief".to_string(),
        statute_ref: "Act 896 Fifth Sch.".to_string(),
        input: serde_json::json!({
            "ssnit_amount": ssnit_amount.normalize().to_string(),
            "tier_three_amount": tier_three_amount.normalize().to_string(),
            "deductible_relief": deductible_relief.normalize().to_string(),
        }),
        output: serde_json::json!({
            "total_relief": amount.normalize().to_string(),
        }),
        reasoning: format!(
            "GHS {} + GHS {} + GHS {} = GHS {}",
            ssnit_amount.normalize(),
            tier_three_amount.normalize(),
            deductible_relief.normalize(),
            amount.normalize()
        ),
    };

    TotalReliefResult { amount, audit_step }
}

/// The result of the chargeable income calculation.
#[derive(Debug, Clone)]
pub struct ChargeableIncomeResult {
    /// The income on which tax is assessed. May be negative when reliefs
    /// exceed accessible income; it is deliberately not clamped here.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the chargeable income.
///
/// The cash allowance is subtracted from the chargeable base in addition to
/// the reliefs; this scheme treats it as relief-exempt. A negative result
/// flows through unclamped so the breakdown stays transparent; the tax
/// evaluation clamps to zero instead.
pub fn calculate_chargeable_income(
    accessible_income: Decimal,
    total_relief: Decimal,
    cash_allowance: Decimal,
    step_number: u32,
) -> ChargeableIncomeResult {
    let amount = accessible_income - total_relief - cash_allowance;

    let audit_step = AuditStep {
        step_number,
        rule_id: "chargeable_income".to_string(),
        rule_name: "Chargeable Income".to_string(),
        statute_ref: "Act 896 s.2".to_string(),
        input: serde_json::json!({
            "accessible_income": accessible_income.normalize().to_string(),
            "total_relief": total_relief.normalize().to_string(),
            "cash_allowance": cash_allowance.normalize().to_string(),
        }),
        output: serde_json::json!({
            "chargeable_income": amount.normalize().to_string(),
        }),
        reasoning: format!(
            "GHS {} - GHS {} - GHS {} = GHS {}",
            accessible_income.normalize(),
            total_relief.normalize(),
            cash_allowance.normalize(),
            amount.normalize()
        ),
    };

    ChargeableIncomeResult { amount, audit_step }
}
