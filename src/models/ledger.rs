//! Staff ledger: the in-memory association between staff members and
//! their payment details.
//!
//! The ledger stands in for the payment-detail store of the wider
//! administration system. Callers build one per payroll run from whatever
//! backing store they use; the engine only reads from it.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{SalaryBand, StaffProfile};

/// Payment detail for a staff member: the salary band assignment plus any
/// externally computed overtime tax for the period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDetail {
    /// The salary band assigned to the staff member.
    pub salary_band: SalaryBand,
    /// Overtime tax already computed outside this engine (default zero).
    pub overtime_tax: Decimal,
}

impl PaymentDetail {
    /// Creates a payment detail with no overtime tax.
    pub fn new(salary_band: SalaryBand) -> Self {
        Self {
            salary_band,
            overtime_tax: Decimal::ZERO,
        }
    }
}

/// The roster of staff and their payment details for a payroll run.
///
/// Staff are keyed by their identifier. A `BTreeMap` keeps run iteration
/// order deterministic, so identical inputs produce identical run output.
#[derive(Debug, Clone, Default)]
pub struct StaffLedger {
    staff: BTreeMap<String, StaffProfile>,
    payment_details: HashMap<String, PaymentDetail>,
}

impl StaffLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a staff member to the ledger.
    pub fn insert_staff(&mut self, staff: StaffProfile) {
        self.staff.insert(staff.id.clone(), staff);
    }

    /// Assigns a payment detail to a staff member.
    pub fn assign_payment_detail(&mut self, staff_id: &str, detail: PaymentDetail) {
        self.payment_details.insert(staff_id.to_string(), detail);
    }

    /// Looks up a staff profile by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::StaffNotFound`] when no profile exists.
    pub fn staff(&self, staff_id: &str) -> PayrollResult<&StaffProfile> {
        self.staff
            .get(staff_id)
            .ok_or_else(|| PayrollError::StaffNotFound {
                staff_id: staff_id.to_string(),
            })
    }

    /// Looks up the payment detail for a staff member.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::PaymentDetailNotFound`] when the staff member
    /// has no salary band association.
    pub fn payment_detail(&self, staff_id: &str) -> PayrollResult<&PaymentDetail> {
        self.payment_details
            .get(staff_id)
            .ok_or_else(|| PayrollError::PaymentDetailNotFound {
                staff_id: staff_id.to_string(),
            })
    }

    /// Iterates over all staff profiles in identifier order.
    pub fn staff_members(&self) -> impl Iterator<Item = &StaffProfile> {
        self.staff.values()
    }

    /// Returns the number of staff members in the ledger.
    pub fn len(&self) -> usize {
        self.staff.len()
    }

    /// Returns true if the ledger has no staff members.
    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }
}
