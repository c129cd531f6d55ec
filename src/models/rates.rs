//! Organization-level statutory rate inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// The statutory contribution rates configured per organization.
///
/// Both rates are percentages of the basic salary (0-100 expected). The
/// engine only requires non-negativity; range validation beyond that is the
/// caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRates {
    /// SSNIT pension contribution rate (percent of basic salary).
    pub ssnit_rate: Decimal,
    /// Supplementary tier-three pension rate (percent of basic salary).
    pub tier_three_rate: Decimal,
}

impl OrganizationRates {
    /// Validates that both rates are non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidRate`] naming the offending field.
    pub fn validate(&self) -> PayrollResult<()> {
        if self.ssnit_rate.is_sign_negative() && !self.ssnit_rate.is_zero() {
            return Err(PayrollError::InvalidRate {
                field: "ssnit_rate".to_string(),
                value: self.ssnit_rate,
            });
        }
        if self.tier_three_rate.is_sign_negative() && !self.tier_three_rate.is_zero() {
            return Err(PayrollError::InvalidRate {
                field: "tier_three_rate".to_string(),
                value: self.tier_three_rate,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_valid_rates_pass() {
        let rates = OrganizationRates {
            ssnit_rate: dec("13.5"),
            tier_three_rate: dec("5"),
        };
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_zero_rates_pass() {
        let rates = OrganizationRates {
            ssnit_rate: Decimal::ZERO,
            tier_three_rate: Decimal::ZERO,
        };
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_negative_ssnit_rate_rejected() {
        let rates = OrganizationRates {
            ssnit_rate: dec("-1"),
            tier_three_rate: dec("5"),
        };
        match rates.validate().unwrap_err() {
            PayrollError::InvalidRate { field, value } => {
                assert_eq!(field, "ssnit_rate");
                assert_eq!(value, dec("-1"));
            }
            other => panic!("Expected InvalidRate, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_tier_three_rate_rejected() {
        let rates = OrganizationRates {
            ssnit_rate: dec("13.5"),
            tier_three_rate: dec("-0.5"),
        };
        match rates.validate().unwrap_err() {
            PayrollError::InvalidRate { field, .. } => {
                assert_eq!(field, "tier_three_rate");
            }
            other => panic!("Expected InvalidRate, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_positive_rate_accepted() {
        // Values above 100 are arithmetically accepted; range checks belong
        // to the caller's validation layer.
        let rates = OrganizationRates {
            ssnit_rate: dec("150"),
            tier_three_rate: dec("0"),
        };
        assert!(rates.validate().is_ok());
    }

    #[test]
    fn test_rates_deserialize_from_json() {
        let rates: OrganizationRates =
            serde_json::from_str(r#"{"ssnit_rate": "13.5", "tier_three_rate": "5"}"#).unwrap();
        assert_eq!(rates.ssnit_rate, dec("13.5"));
        assert_eq!(rates.tier_three_rate, dec("5"));
    }
}
