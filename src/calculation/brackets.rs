//! Graduated (marginal) bracket evaluation for resident full-time staff.
//!
//! Each bracket taxes only the slice of chargeable income that falls within
//! it. The top bracket has no width and taxes the entire remainder.

use rust_decimal::Decimal;

use crate::config::TaxBracket;
use crate::models::AuditStep;

use super::currency::round_currency;

/// The contribution of a single bracket to the assessed tax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketLine {
    /// The lower bound of the bracket.
    pub lower_bound: Decimal,
    /// The slice of income taxed in this bracket.
    pub taxed_amount: Decimal,
    /// The marginal rate applied (fraction).
    pub rate: Decimal,
    /// The tax contributed by this bracket (unrounded).
    pub tax: Decimal,
}

/// The result of the graduated tax evaluation.
#[derive(Debug, Clone)]
pub struct ProgressiveTaxResult {
    /// The assessed tax, rounded to currency and never negative.
    pub tax: Decimal,
    /// Per-bracket contributions, only for brackets that applied.
    pub lines: Vec<BracketLine>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Evaluates the graduated schedule against a chargeable income.
///
/// For every bracket whose lower bound the income exceeds, the taxed slice
/// is `min(chargeable - lower_bound, width)`; the unbounded top bracket
/// taxes the full remainder. Non-positive chargeable income produces zero
/// tax (no bracket applies), which is where the engine clamps rather than
/// in the chargeable income itself.
///
/// # Arguments
///
/// * `chargeable_income` - The income to assess
/// * `brackets` - The schedule's brackets, sorted by lower bound
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_progressive_tax;
/// use paye_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/gh_paye").unwrap();
/// let result = calculate_progressive_tax(
///     Decimal::from_str("1000").unwrap(),
///     loader.config().brackets(),
///     1,
/// );
/// assert_eq!(result.tax, Decimal::from_str("81.15").unwrap());
/// ```
pub fn calculate_progressive_tax(
    chargeable_income: Decimal,
    brackets: &[TaxBracket],
    step_number: u32,
) -> ProgressiveTaxResult {
    let mut lines = Vec::new();
    let mut total = Decimal::ZERO;

    for bracket in brackets {
        if chargeable_income <= bracket.lower_bound {
            continue;
        }
        let above_lower = chargeable_income - bracket.lower_bound;
        let taxed_amount = match bracket.width {
            Some(width) => above_lower.min(width),
            None => above_lower,
        };
        let tax = taxed_amount * bracket.rate;
        total += tax;
        lines.push(BracketLine {
            lower_bound: bracket.lower_bound,
            taxed_amount,
            rate: bracket.rate,
            tax,
        });
    }

    let tax = round_currency(total.max(Decimal::ZERO));

    let line_values: Vec<serde_json::Value> = lines
        .iter()
        .map(|line| {
            serde_json::json!({
                "lower_bound": line.lower_bound.normalize().to_string(),
                "taxed_amount": line.taxed_amount.normalize().to_string(),
                "rate": line.rate.normalize().to_string(),
                "tax": line.tax.normalize().to_string(),
            })
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "graduated_tax".to_string(),
        rule_name: "Graduated Tax Schedule".to_string(),
        statute_ref: "Act 896 First Sch.".to_string(),
        input: serde_json::json!({
            "chargeable_income": chargeable_income.normalize().to_string(),
        }),
        output: serde_json::json!({
            "tax_deductible": tax.normalize().to_string(),
            "brackets_applied": line_values,
        }),
        reasoning: format!(
            "{} bracket(s) applied to chargeable income GHS {}; tax GHS {}",
            lines.len(),
            chargeable_income.normalize(),
            tax.normalize()
        ),
    };

    ProgressiveTaxResult {
        tax,
        lines,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn schedule() -> Vec<TaxBracket> {
        vec![
            TaxBracket {
                lower_bound: dec("0"),
                width: Some(dec("402")),
                rate: dec("0"),
            },
            TaxBracket {
                lower_bound: dec("402"),
                width: Some(dec("110")),
                rate: dec("0.05"),
            },
            TaxBracket {
                lower_bound: dec("512"),
                width: Some(dec("130")),
                rate: dec("0.10"),
            },
            TaxBracket {
                lower_bound: dec("642"),
                width: Some(dec("3000")),
                rate: dec("0.175"),
            },
            TaxBracket {
                lower_bound: dec("3642"),
                width: Some(dec("16395")),
                rate: dec("0.25"),
            },
            TaxBracket {
                lower_bound: dec("20037"),
                width: Some(dec("29963")),
                rate: dec("0.30"),
            },
            TaxBracket {
                lower_bound: dec("50000"),
                width: None,
                rate: dec("0.35"),
            },
        ]
    }

    fn tax_for(chargeable: &str) -> Decimal {
        calculate_progressive_tax(dec(chargeable), &schedule(), 1).tax
    }

    /// GT-001: income inside the free band is untaxed
    #[test]
    fn test_income_in_free_band_untaxed() {
        assert_eq!(tax_for("402"), Decimal::ZERO);
        assert_eq!(tax_for("300"), Decimal::ZERO);
    }

    /// GT-002: worked example at 1000
    #[test]
    fn test_chargeable_1000() {
        // 110 * 0.05 + 130 * 0.10 + 358 * 0.175 = 5.5 + 13 + 62.65 = 81.15
        assert_eq!(tax_for("1000"), dec("81.15"));
    }

    /// GT-003: exactly at a bracket boundary
    #[test]
    fn test_chargeable_at_boundary_642() {
        // 110 * 0.05 + 130 * 0.10 = 18.50
        assert_eq!(tax_for("642"), dec("18.50"));
    }

    /// GT-004: continuity across the 642 boundary
    #[test]
    fn test_continuity_at_boundary() {
        let below = tax_for("642");
        let above = tax_for("642.01");
        let marginal_step = dec("0.01") * dec("0.175");
        assert!(above >= below);
        assert!(above - below <= marginal_step);
    }

    /// GT-005: top bracket taxes the full remainder at 35%
    #[test]
    fn test_top_bracket_remainder() {
        // Tax at exactly 50,000:
        // 5.5 + 13 + 525 + 4098.75 + 8988.9 = 13631.15
        assert_eq!(tax_for("50000"), dec("13631.15"));
        // 1,000 above the top threshold adds 350.
        assert_eq!(tax_for("51000"), dec("13981.15"));
    }

    /// GT-006: zero and negative chargeable income produce zero tax
    #[test]
    fn test_non_positive_income_produces_zero() {
        assert_eq!(tax_for("0"), Decimal::ZERO);
        assert_eq!(tax_for("-500"), Decimal::ZERO);
    }

    /// GT-007: bracket lines record the applied slices
    #[test]
    fn test_bracket_lines_recorded() {
        let result = calculate_progressive_tax(dec("1000"), &schedule(), 1);
        // Free band applies (zero rate) plus three taxed brackets.
        assert_eq!(result.lines.len(), 4);
        assert_eq!(result.lines[3].lower_bound, dec("642"));
        assert_eq!(result.lines[3].taxed_amount, dec("358"));
    }

    #[test]
    fn test_audit_step_names_rule() {
        let result = calculate_progressive_tax(dec("1000"), &schedule(), 4);
        assert_eq!(result.audit_step.rule_id, "graduated_tax");
        assert_eq!(result.audit_step.step_number, 4);
        assert!(result.audit_step.reasoning.contains("81.15"));
    }

    proptest! {
        /// Tax is non-negative for any chargeable income.
        #[test]
        fn prop_tax_never_negative(cents in -10_000_000i64..10_000_000i64) {
            let chargeable = Decimal::new(cents, 2);
            let result = calculate_progressive_tax(chargeable, &schedule(), 1);
            prop_assert!(result.tax >= Decimal::ZERO);
        }

        /// Tax is non-decreasing as chargeable income increases.
        #[test]
        fn prop_tax_monotonic(
            cents in 0i64..10_000_000i64,
            delta in 0i64..1_000_000i64,
        ) {
            let lower = Decimal::new(cents, 2);
            let higher = Decimal::new(cents + delta, 2);
            let tax_lower = calculate_progressive_tax(lower, &schedule(), 1).tax;
            let tax_higher = calculate_progressive_tax(higher, &schedule(), 1).tax;
            prop_assert!(tax_higher >= tax_lower);
        }

        /// Marginal rate never exceeds the top rate: the tax increase for an
        /// income increase d is at most 0.35 * d (plus a rounding cent).
        #[test]
        fn prop_marginal_rate_bounded(
            cents in 0i64..10_000_000i64,
            delta in 1i64..1_000_000i64,
        ) {
            let lower = Decimal::new(cents, 2);
            let higher = Decimal::new(cents + delta, 2);
            let tax_lower = calculate_progressive_tax(lower, &schedule(), 1).tax;
            let tax_higher = calculate_progressive_tax(higher, &schedule(), 1).tax;
            let bound = Decimal::new(delta, 2) * dec("0.35") + dec("0.01");
            prop_assert!(tax_higher - tax_lower <= bound);
        }
    }
}
