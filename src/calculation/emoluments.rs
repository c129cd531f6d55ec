//! Cash emolument and accessible income aggregation.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of the total cash emolument calculation.
#[derive(Debug, Clone)]
pub struct CashEmolumentResult {
    /// Basic salary plus cash allowance and excess bonus.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the total cash emolument.
///
/// The emolument is the plain sum of the basic salary, cash allowance, and
/// excess bonus. A zero or absent component simply contributes nothing;
/// in particular the excess bonus counts even when the cash allowance is
/// zero.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_cash_emolument;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_cash_emolument(
///     Decimal::from_str("2500.00").unwrap(),
///     Decimal::from_str("150.00").unwrap(),
///     Decimal::ZERO,
///     3,
/// );
/// assert_eq!(result.amount, Decimal::from_str("2650.00").unwrap());
/// ```
pub fn calculate_cash_emolument(
    basic_salary: Decimal,
    cash_allowance: Decimal,
    excess_bonus: Decimal,
    step_number: u32,
) -> CashEmolumentResult {
    let amount = basic_salary + cash_allowance + excess_bonus;

    let audit_step = AuditStep {
        step_number,
        rule_id: "total_cash_emolument".to_string(),
        rule_name: "Total Cash Emolument".to_string(),
        statute_ref: "Act 896 s.4(2)(a)".to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "cash_allowance": cash_allowance.normalize().to_string(),
            "excess_bonus": excess_bonus.normalize().to_string(),
        }),
        output: serde_json::json!({
            "total_cash_emolument": amount.normalize().to_string(),
        }),
        reasoning: format!(
            "GHS {} + GHS {} + GHS {} = GHS {}",
            basic_salary.normalize(),
            cash_allowance.normalize(),
            excess_bonus.normalize(),
            amount.normalize()
        ),
    };

    CashEmolumentResult { amount, audit_step }
}

/// The result of the accessible income calculation.
#[derive(Debug, Clone)]
pub struct AccessibleIncomeResult {
    /// Total cash emolument plus vehicle elements and non-cash benefits.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the accessible income: the cash emolument plus the valued
/// vehicle and non-cash benefits.
pub fn calculate_accessible_income(
    total_cash_emolument: Decimal,
    vehicle_elements: Decimal,
    non_cash_benefits: Decimal,
    step_number: u32,
) -> AccessibleIncomeResult {
    let amount = total_cash_emolument + vehicle_elements + non_cash_benefits;

    let audit_step = AuditStep {
        step_number,
        rule_id: "accessible_income".to_string(),
        rule_name: "Accessible Income".to_string(),
        statute_ref: "Act 896 s.4(2)".to_string(),
        input: serde_json::json!({
            "total_cash_emolument": total_cash_emolument.normalize().to_string(),
            "vehicle_elements": vehicle_elements.normalize().to_string(),
            "non_cash_benefits": non_cash_benefits.normalize().to_string(),
        }),
        output: serde_json::json!({
            "accessible_income": amount.normalize().to_string(),
        }),
        reasoning: format!(
            "GHS {} + GHS {} + GHS {} = GHS {}",
            total_cash_emolument.normalize(),
            vehicle_elements.normalize(),
            non_cash_benefits.normalize(),
            amount.normalize()
        ),
    };

    AccessibleIncomeResult { amount, audit_step }
}
