//! PAYE Payroll Tax Engine
//!
//! This crate calculates statutory payroll deductions for a Ghana-style PAYE
//! scheme: SSNIT and tier-three pension contributions, reliefs, chargeable
//! income, and residency-dependent income tax (flat rates for non-resident,
//! part-time and casual staff; the graduated schedule of the Income Tax Act
//! 2015 (Act 896) for full-time residents).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
