//! Tier-three pension contribution calculation.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::currency::round_currency;

/// The result of the tier-three contribution calculation.
#[derive(Debug, Clone)]
pub struct TierThreeResult {
    /// The tier-three contribution amount, rounded to currency.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the supplementary tier-three contribution on the basic salary.
///
/// The contribution is `basic_salary * tier_three_rate / 100`; a zero or
/// unset rate contributes nothing. Unlike SSNIT there is no legacy fallback
/// here.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_tier_three;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_tier_three(
///     Decimal::from_str("2500.00").unwrap(),
///     Decimal::from_str("5").unwrap(),
///     2,
/// );
/// assert_eq!(result.amount, Decimal::from_str("125.00").unwrap());
/// ```
pub fn calculate_tier_three(
    basic_salary: Decimal,
    tier_three_rate: Decimal,
    step_number: u32,
) -> TierThreeResult {
    let amount = round_currency(basic_salary * tier_three_rate / Decimal::ONE_HUNDRED);

    let audit_step = AuditStep {
        step_number,
        rule_id: "tier_three_contribution".to_string(),
        rule_name: "Tier Three Contribution".to_string(),
        statute_ref: "Act 766 s.90".to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "tier_three_rate": tier_three_rate.normalize().to_string(),
        }),
        output: serde_json::json!({
            "tier_three_amount": amount.normalize().to_string(),
        }),
        reasoning: format!(
            "GHS {} x {}% = GHS {}",
            basic_salary.normalize(),
            tier_three_rate.normalize(),
            amount.normalize()
        ),
    };

    TierThreeResult { amount, audit_step }
}
