//! Request types for the PAYE Payroll Tax Engine API.
//!
//! This module defines the JSON request structures for the
//! `/payroll/calculate` and `/payroll/run` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    BenefitPackage, OrganizationRates, PaymentDetail, ResidencyStatus, SalaryBand, StaffLedger,
    StaffProfile,
};

/// Request body for the `/payroll/calculate` endpoint.
///
/// Contains the staff member, their salary band (absent when the staff
/// member has no payment detail on record), and the organization rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The staff member to calculate for.
    pub staff: StaffRequest,
    /// The salary band assigned to the staff member, if any.
    #[serde(default)]
    pub salary_band: Option<SalaryBandRequest>,
    /// The organization's statutory rates.
    pub rates: RatesRequest,
    /// Overtime tax computed outside the engine (default zero).
    #[serde(default)]
    pub overtime_tax: Option<Decimal>,
}

/// Request body for the `/payroll/run` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRunRequest {
    /// The organization's statutory rates.
    pub rates: RatesRequest,
    /// The staff roster for the run.
    pub staff: Vec<PayrollRunEntry>,
}

/// One staff member in a payroll run request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRunEntry {
    /// The staff member.
    pub staff: StaffRequest,
    /// The salary band assigned to the staff member, if any.
    #[serde(default)]
    pub salary_band: Option<SalaryBandRequest>,
    /// Overtime tax computed outside the engine (default zero).
    #[serde(default)]
    pub overtime_tax: Option<Decimal>,
}

/// Staff information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffRequest {
    /// Unique identifier for the staff member.
    pub id: String,
    /// The residency classification for tax purposes.
    pub residency_status: ResidencyStatus,
}

/// Salary band information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryBandRequest {
    /// The name of the band.
    pub name: String,
    /// The base monthly salary amount.
    pub amount: Decimal,
    /// The benefit package for this band, if any.
    #[serde(default)]
    pub benefit_package: Option<BenefitPackageRequest>,
}

/// Benefit package information in a request. All components default to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenefitPackageRequest {
    /// Cash allowance paid alongside the basic salary.
    #[serde(default)]
    pub cash_allowance: Decimal,
    /// Bonus paid in excess of the statutory bonus threshold.
    #[serde(default)]
    pub excess_bonus: Decimal,
    /// Bonus income taxed separately.
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

/// Organization rates in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesRequest {
    /// SSNIT pension contribution rate (percent of basic salary).
    pub ssnit_rate: Decimal,
    /// Supplementary tier-three pension rate (percent of basic salary).
    pub tier_three_rate: Decimal,
}

impl From<StaffRequest> for StaffProfile {
    fn from(req: StaffRequest) -> Self {
        StaffProfile {
            id: req.id,
            residency_status: req.residency_status,
        }
    }
}

impl From<BenefitPackageRequest> for BenefitPackage {
    fn from(req: BenefitPackageRequest) -> Self {
        BenefitPackage {
            cash_allowance: req.cash_allowance,
            excess_bonus: req.excess_bonus,
            bonus_income: req.bonus_income,
            vehicle_elements: req.vehicle_elements,
            non_cash_benefits: req.non_cash_benefits,
            deductible_relief: req.deductible_relief,
        }
    }
}

impl From<SalaryBandRequest> for SalaryBand {
    fn from(req: SalaryBandRequest) -> Self {
        SalaryBand {
            name: req.name,
            amount: req.amount,
            benefit_package: req.benefit_package.map(Into::into),
        }
    }
}

impl From<RatesRequest> for OrganizationRates {
    fn from(req: RatesRequest) -> Self {
        OrganizationRates {
            ssnit_rate: req.ssnit_rate,
            tier_three_rate: req.tier_three_rate,
        }
    }
}

impl CalculationRequest {
    /// Builds a single-member ledger from this request.
    ///
    /// Returns the ledger and the staff identifier to calculate for.
    pub fn into_ledger(self) -> (StaffLedger, String, OrganizationRates) {
        let mut ledger = StaffLedger::new();
        let staff_id = self.staff.id.clone();
        ledger.insert_staff(self.staff.into());
        if let Some(band) = self.salary_band {
            ledger.assign_payment_detail(
                &staff_id,
                PaymentDetail {
                    salary_band: band.into(),
                    overtime_tax: self.overtime_tax.unwrap_or_default(),
                },
            );
        }
        (ledger, staff_id, self.rates.into())
    }
}

impl PayrollRunRequest {
    /// Builds the run ledger from this request.
    pub fn into_ledger(self) -> (StaffLedger, OrganizationRates) {
        let mut ledger = StaffLedger::new();
        for entry in self.staff {
            let staff_id = entry.staff.id.clone();
            ledger.insert_staff(entry.staff.into());
            if let Some(band) = entry.salary_band {
                ledger.assign_payment_detail(
                    &staff_id,
                    PaymentDetail {
                        salary_band: band.into(),
                        overtime_tax: entry.overtime_tax.unwrap_or_default(),
                    },
                );
            }
        }
        (ledger, self.rates.into())
    }
}
