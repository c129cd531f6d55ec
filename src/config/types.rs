//! Configuration types for the statutory tax schedule.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::ResidencyStatus;

/// Metadata about the tax schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// The schedule code (e.g., "GH-PAYE-2021").
    pub code: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The version or effective date of the schedule.
    pub version: String,
    /// URL to the official schedule documentation.
    pub source_url: String,
}

/// A single bracket in the graduated tax schedule.
///
/// Brackets are marginal: a bracket taxes only the slice of chargeable
/// income between `lower_bound` and `lower_bound + width`. The top bracket
/// omits `width` and taxes the entire remainder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// The cumulative income threshold where this bracket begins.
    pub lower_bound: Decimal,
    /// The width of the band taxed at this rate; absent for the top bracket.
    #[serde(default)]
    pub width: Option<Decimal>,
    /// The marginal rate as a fraction (e.g., 0.175 for 17.5%).
    pub rate: Decimal,
}

impl TaxBracket {
    /// Returns the exclusive upper bound of this bracket, if bounded.
    pub fn upper_bound(&self) -> Option<Decimal> {
        self.width.map(|w| self.lower_bound + w)
    }
}

/// Schedule configuration file structure (schedule.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Schedule metadata.
    pub metadata: ScheduleMetadata,
    /// The graduated bracket table for full-time residents.
    pub brackets: Vec<TaxBracket>,
}

/// The fallback applied when the SSNIT rate is unset or zero.
///
/// The legacy system charged the entire basic salary when no rate was
/// configured, conflating "no rate" with "100% rate". That behavior is
/// preserved as the default but can be switched to a zero contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SsnitFallback {
    /// Charge the full basic salary (legacy behavior).
    BasicSalary,
    /// Charge nothing.
    Zero,
}

/// Residency settings file structure (residency.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct ResidencySettings {
    /// Flat rate (fraction) for non-resident staff.
    pub non_resident: Decimal,
    /// Flat rate (fraction) for resident part-time staff.
    pub resident_part_time: Decimal,
    /// Flat rate (fraction) for resident casual staff.
    pub resident_casual: Decimal,
    /// The fallback applied when the SSNIT rate is unset or zero.
    pub ssnit_fallback: SsnitFallback,
}

/// The complete tax configuration loaded from YAML files.
///
/// This struct aggregates the schedule and residency settings loaded from
/// a configuration directory.
#[derive(Debug, Clone)]
pub struct TaxConfig {
    /// Schedule metadata.
    metadata: ScheduleMetadata,
    /// Graduated brackets sorted by lower bound ascending.
    brackets: Vec<TaxBracket>,
    /// Residency settings.
    residency: ResidencySettings,
}

impl TaxConfig {
    /// Creates a new TaxConfig from its component parts.
    pub fn new(
        metadata: ScheduleMetadata,
        brackets: Vec<TaxBracket>,
        residency: ResidencySettings,
    ) -> Self {
        let mut sorted_brackets = brackets;
        sorted_brackets.sort_by(|a, b| a.lower_bound.cmp(&b.lower_bound));
        Self {
            metadata,
            brackets: sorted_brackets,
            residency,
        }
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the graduated bracket table, sorted by lower bound.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Returns the residency settings.
    pub fn residency(&self) -> &ResidencySettings {
        &self.residency
    }

    /// Returns the flat rate for a residency classification, or `None` for
    /// full-time residents (who use the graduated schedule).
    pub fn flat_rate(&self, status: ResidencyStatus) -> Option<Decimal> {
        match status {
            ResidencyStatus::NonResident => Some(self.residency.non_resident),
            ResidencyStatus::ResidentPartTime => Some(self.residency.resident_part_time),
            ResidencyStatus::ResidentCasual => Some(self.residency.resident_casual),
            ResidencyStatus::ResidentFullTime => None,
        }
    }

    /// Returns the configured SSNIT fallback policy.
    pub fn ssnit_fallback(&self) -> SsnitFallback {
        self.residency.ssnit_fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_metadata() -> ScheduleMetadata {
        ScheduleMetadata {
            code: "GH-PAYE-2021".to_string(),
            name: "Graduated income tax schedule".to_string(),
            version: "2021-01-01".to_string(),
            source_url: "https://example.com".to_string(),
        }
    }

    fn test_residency() -> ResidencySettings {
        ResidencySettings {
            non_resident: dec("0.25"),
            resident_part_time: dec("0.10"),
            resident_casual: dec("0.05"),
            ssnit_fallback: SsnitFallback::BasicSalary,
        }
    }

    #[test]
    fn test_brackets_sorted_on_construction() {
        let brackets = vec![
            TaxBracket {
                lower_bound: dec("402"),
                width: Some(dec("110")),
                rate: dec("0.05"),
            },
            TaxBracket {
                lower_bound: dec("0"),
                width: Some(dec("402")),
                rate: dec("0"),
            },
        ];
        let config = TaxConfig::new(test_metadata(), brackets, test_residency());

        assert_eq!(config.brackets()[0].lower_bound, dec("0"));
        assert_eq!(config.brackets()[1].lower_bound, dec("402"));
    }

    #[test]
    fn test_upper_bound() {
        let bracket = TaxBracket {
            lower_bound: dec("642"),
            width: Some(dec("3000")),
            rate: dec("0.175"),
        };
        assert_eq!(bracket.upper_bound(), Some(dec("3642")));

        let top = TaxBracket {
            lower_bound: dec("50000"),
            width: None,
            rate: dec("0.35"),
        };
        assert_eq!(top.upper_bound(), None);
    }

    #[test]
    fn test_flat_rate_per_residency() {
        let config = TaxConfig::new(test_metadata(), vec![], test_residency());

        assert_eq!(
            config.flat_rate(ResidencyStatus::NonResident),
            Some(dec("0.25"))
        );
        assert_eq!(
            config.flat_rate(ResidencyStatus::ResidentPartTime),
            Some(dec("0.10"))
        );
        assert_eq!(
            config.flat_rate(ResidencyStatus::ResidentCasual),
            Some(dec("0.05"))
        );
        assert_eq!(config.flat_rate(ResidencyStatus::ResidentFullTime), None);
    }

    #[test]
    fn test_ssnit_fallback_deserializes_from_yaml() {
        let settings: ResidencySettings = serde_yaml::from_str(
            r#"
            non_resident: "0.25"
            resident_part_time: "0.10"
            resident_casual: "0.05"
            ssnit_fallback: zero
            "#,
        )
        .unwrap();
        assert_eq!(settings.ssnit_fallback, SsnitFallback::Zero);
    }

    #[test]
    fn test_bracket_deserializes_without_width() {
        let bracket: TaxBracket = serde_yaml::from_str(
            r#"
            lower_bound: "50000"
            rate: "0.35"
            "#,
        )
        .unwrap();
        assert_eq!(bracket.width, None);
        assert_eq!(bracket.rate, dec("0.35"));
    }
}
