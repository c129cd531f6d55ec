//! Salary band and benefit package models.
//!
//! A salary band is a pay grade with a base monthly amount and an optional
//! benefit package of monetary components.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The benefit components attached to a salary band.
///
/// Every component is a monetary amount defaulting to zero when absent,
/// so a partially specified package deserializes cleanly.
///
/// # Example
///
/// ```
/// use paye_engine::models::BenefitPackage;
/// use rust_decimal::Decimal;
///
/// let package: BenefitPackage = serde_json::from_str(r#"{"cash_allowance": "150.00"}"#).unwrap();
/// assert_eq!(package.cash_allowance, Decimal::new(15000, 2));
/// assert_eq!(package.bonus_income, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitPackage {
    /// Cash allowance paid alongside the basic salary.
    #[serde(default)]
    pub cash_allowance: Decimal,
    /// Bonus paid in excess of the statutory bonus threshold.
    #[serde(default)]
    pub excess_bonus: Decimal,
    /// Bonus income taxed separately and added to the final tax payable.
    #[serde(default)]
    pub bonus_income: Decimal,
    /// Value of vehicle benefit elements.
    #[serde(default)]
    pub vehicle_elements: Decimal,
    /// Value of non-cash benefits.
    #[serde(default)]
    pub non_cash_benefits: Decimal,
    /// Relief amount deductible from the chargeable base.
    #[serde(default)]
    pub deductible_relief: Decimal,
}

/// A salary band: a pay grade with a base monthly amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBand {
    /// The name of the band (e.g., "Senior Teacher").
    pub name: String,
    /// The base monthly salary amount for this band.
    pub amount: Decimal,
    /// The benefit package for this band, if any.
    #[serde(default)]
    pub benefit_package: Option<BenefitPackage>,
}

impl SalaryBand {
    /// Returns the benefit package, or an all-zero package when absent.
    pub fn benefits(&self) -> BenefitPackage {
        self.benefit_package.clone().unwrap_or_default()
    }
}
