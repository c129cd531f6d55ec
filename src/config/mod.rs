//! Statutory schedule configuration for the PAYE Payroll Tax Engine.
//!
//! Tax brackets, flat residency rates, and policy flags are loaded from
//! YAML files rather than hard-coded, so a schedule revision is a config
//! change, not a code change.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ResidencySettings, ScheduleConfig, ScheduleMetadata, SsnitFallback, TaxBracket, TaxConfig,
};
