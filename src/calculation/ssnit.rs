//! SSNIT pension contribution calculation.
//!
//! This module computes the employee SSNIT contribution from the basic
//! salary and the organization's SSNIT rate.

use rust_decimal::Decimal;

use crate::config::SsnitFallback;
use crate::models::AuditStep;

use super::currency::round_currency;

/// The result of the SSNIT contribution calculation, including the amount
/// and audit step.
#[derive(Debug, Clone)]
pub struct SsnitContributionResult {
    /// The SSNIT contribution amount, rounded to currency.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the SSNIT contribution on the basic salary.
///
/// When the rate is positive, the contribution is
/// `basic_salary * ssnit_rate / 100`. When the rate is zero (or effectively
/// unset), the configured fallback applies: the legacy behavior charges the
/// entire basic salary; the `zero` policy charges nothing.
///
/// # Arguments
///
/// * `basic_salary` - The base monthly salary
/// * `ssnit_rate` - The SSNIT rate as a percentage (e.g., 13.5)
/// * `fallback` - The policy for a zero/unset rate
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_ssnit;
/// use paye_engine::config::SsnitFallback;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_ssnit(
///     Decimal::from_str("2500.00").unwrap(),
///     Decimal::from_str("13.5").unwrap(),
///     SsnitFallback::BasicSalary,
///     1,
/// );
/// assert_eq!(result.amount, Decimal::from_str("337.50").unwrap());
/// ```
pub fn calculate_ssnit(
    basic_salary: Decimal,
    ssnit_rate: Decimal,
    fallback: SsnitFallback,
    step_number: u32,
) -> SsnitContributionResult {
    let hundred = Decimal::ONE_HUNDRED;

    let (amount, reasoning, fallback_applied) = if !ssnit_rate.is_zero() {
        let amount = round_currency(basic_salary * ssnit_rate / hundred);
        (
            amount,
            format!(
                "GHS {} x {}% = GHS {}",
                basic_salary.normalize(),
                ssnit_rate.normalize(),
                amount.normalize()
            ),
            false,
        )
    } else {
        match fallback {
            SsnitFallback::BasicSalary => (
                round_currency(basic_salary),
                format!(
                    "SSNIT rate not set; legacy fallback charges the full basic salary GHS {}",
                    basic_salary.normalize()
                ),
                true,
            ),
            SsnitFallback::Zero => (
                Decimal::ZERO,
                "SSNIT rate not set; zero-contribution fallback applies".to_string(),
                true,
            ),
        }
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "ssnit_contribution".to_string(),
        rule_name: "SSNIT Contribution".to_string(),
        statute_ref: "Act 766 s.3(1)".to_string(),
        input: serde_json::json!({
            "basic_salary": basic_salary.normalize().to_string(),
            "ssnit_rate": ssnit_rate.normalize().to_string(),
        }),
        output: serde_json::json!({
            "ssnit_amount": amount.normalize().to_string(),
            "fallback_applied": fallback_applied,
        }),
        reasoning,
    };

    SsnitContributionResult { amount, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// SS-001: standard rate applied to basic
    #[test]
    fn test_standard_rate_applied_to_basic() {
        let result = calculate_ssnit(dec("2500.00"), dec("13.5"), SsnitFallback::BasicSalary, 1);

        assert_eq!(result.amount, dec("337.50"));
        assert_eq!(result.audit_step.rule_id, "ssnit_contribution");
        assert_eq!(
            result.audit_step.output["fallback_applied"]
                .as_bool()
                .unwrap(),
            false
        );
    }

    /// SS-002: zero rate with legacy fallback charges full basic
    #[test]
    fn test_zero_rate_legacy_fallback_charges_basic() {
        let result = calculate_ssnit(dec("2500.00"), Decimal::ZERO, SsnitFallback::BasicSalary, 1);

        assert_eq!(result.amount, dec("2500.00"));
        assert_eq!(
            result.audit_step.output["fallback_applied"]
                .as_bool()
                .unwrap(),
            true
        );
        assert!(result.audit_step.reasoning.contains("legacy fallback"));
    }

    /// SS-003: zero rate with zero fallback charges nothing
    #[test]
    fn test_zero_rate_zero_fallback_charges_nothing() {
        let result = calculate_ssnit(dec("2500.00"), Decimal::ZERO, SsnitFallback::Zero, 1);

        assert_eq!(result.amount, Decimal::ZERO);
        assert_eq!(
            result.audit_step.output["fallback_applied"]
                .as_bool()
                .unwrap(),
            true
        );
    }

    /// SS-004: fractional result is rounded to currency
    #[test]
    fn test_result_rounded_to_currency() {
        // 1234.56 * 13.5% = 166.6656 -> 166.67
        let result = calculate_ssnit(dec("1234.56"), dec("13.5"), SsnitFallback::BasicSalary, 1);
        assert_eq!(result.amount, dec("166.67"));
    }

    #[test]
    fn test_zero_basic_yields_zero() {
        let result = calculate_ssnit(Decimal::ZERO, dec("13.5"), SsnitFallback::BasicSalary, 1);
        assert_eq!(result.amount, Decimal::ZERO);
    }

    #[test]
    fn test_audit_step_has_correct_step_number() {
        let result = calculate_ssnit(dec("2500.00"), dec("13.5"), SsnitFallback::BasicSalary, 7);
        assert_eq!(result.audit_step.step_number, 7);
    }

    #[test]
    fn test_audit_reasoning_shows_arithmetic() {
        let result = calculate_ssnit(dec("2500.00"), dec("13.5"), SsnitFallback::BasicSalary, 1);
        assert!(result.audit_step.reasoning.contains("2500"));
        assert!(result.audit_step.reasoning.contains("13.5"));
        assert!(result.audit_step.reasoning.contains("337.5"));
    }

    proptest! {
        /// The contribution is never negative for non-negative basic and
        /// rate, under either fallback policy.
        #[test]
        fn prop_contribution_never_negative(
            basic_cents in 0i64..100_000_000i64,
            rate_bps in 0i64..10_000i64,
        ) {
            let basic = Decimal::new(basic_cents, 2);
            let rate = Decimal::new(rate_bps, 2);
            for fallback in [SsnitFallback::BasicSalary, SsnitFallback::Zero] {
                let result = calculate_ssnit(basic, rate, fallback, 1);
                prop_assert!(result.amount >= Decimal::ZERO);
            }
        }

        /// The contribution never exceeds the basic salary for rates up to
        /// 100%, fallback included.
        #[test]
        fn prop_contribution_bounded_by_basic(
            basic_cents in 0i64..100_000_000i64,
            rate_bps in 0i64..10_000i64,
        ) {
            let basic = Decimal::new(basic_cents, 2);
            let rate = Decimal::new(rate_bps, 2);
            for fallback in [SsnitFallback::BasicSalary, SsnitFallback::Zero] {
                let result = calculate_ssnit(basic, rate, fallback, 1);
                prop_assert!(result.amount <= basic);
            }
        }
    }
}
