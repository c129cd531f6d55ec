//! Staff model and related types.
//!
//! This module defines the StaffProfile struct and ResidencyStatus enum
//! for representing staff members in the payroll system.

use serde::{Deserialize, Serialize};

/// The residency classification of a staff member for tax purposes.
///
/// The classification determines which tax scheme applies: flat rates for
/// the first three categories, the graduated bracket schedule for
/// full-time residents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResidencyStatus {
    /// Staff member is not resident in Ghana (flat 25%).
    #[serde(rename = "Non-Resident")]
    NonResident,
    /// Resident staff member engaged part-time (flat 10%).
    #[serde(rename = "Resident-Part-Time")]
    ResidentPartTime,
    /// Resident staff member engaged casually (flat 5%).
    #[serde(rename = "Resident-Casual")]
    ResidentCasual,
    /// Resident staff member engaged full-time (graduated schedule).
    #[serde(rename = "Resident-Full-Time")]
    ResidentFullTime,
}

impl ResidencyStatus {
    /// Returns true if this classification is taxed on the graduated schedule.
    ///
    /// # Examples
    ///
    /// ```
    /// use paye_engine::models::ResidencyStatus;
    ///
    /// assert!(ResidencyStatus::ResidentFullTime.uses_graduated_schedule());
    /// assert!(!ResidencyStatus::NonResident.uses_graduated_schedule());
    /// ```
    pub fn uses_graduated_schedule(&self) -> bool {
        *self == ResidencyStatus::ResidentFullTime
    }
}

/// Represents a staff member subject to payroll tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffProfile {
    /// Unique identifier for the staff member.
    pub id: String,
    /// The residency classification for tax purposes.
    pub residency_status: ResidencyStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_time_resident() {
        let json = r#"{
            "id": "staff_001",
            "residency_status": "Resident-Full-Time"
        }"#;

        let staff: StaffProfile = serde_json::from_str(json).unwrap();
        assert_eq!(staff.id, "staff_001");
        assert_eq!(staff.residency_status, ResidencyStatus::ResidentFullTime);
    }

    #[test]
    fn test_deserialize_non_resident() {
        let json = r#"{
            "id": "staff_002",
            "residency_status": "Non-Resident"
        }"#;

        let staff: StaffProfile = serde_json::from_str(json).unwrap();
        assert_eq!(staff.residency_status, ResidencyStatus::NonResident);
    }

    #[test]
    fn test_residency_status_serialization() {
        assert_eq!(
            serde_json::to_string(&ResidencyStatus::NonResident).unwrap(),
            "\"Non-Resident\""
        );
        assert_eq!(
            serde_json::to_string(&ResidencyStatus::ResidentPartTime).unwrap(),
            "\"Resident-Part-Time\""
        );
        assert_eq!(
            serde_json::to_string(&ResidencyStatus::ResidentCasual).unwrap(),
            "\"Resident-Casual\""
        );
        assert_eq!(
            serde_json::to_string(&ResidencyStatus::ResidentFullTime).unwrap(),
            "\"Resident-Full-Time\""
        );
    }

    #[test]
    fn test_unknown_residency_string_is_rejected() {
        let json = r#"{
            "id": "staff_003",
            "residency_status": "Resident-Contractor"
        }"#;

        let result: Result<StaffProfile, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_only_full_time_uses_graduated_schedule() {
        assert!(ResidencyStatus::ResidentFullTime.uses_graduated_schedule());
        assert!(!ResidencyStatus::ResidentPartTime.uses_graduated_schedule());
        assert!(!ResidencyStatus::ResidentCasual.uses_graduated_schedule());
        assert!(!ResidencyStatus::NonResident.uses_graduated_schedule());
    }

    #[test]
    fn test_staff_profile_round_trip() {
        let staff = StaffProfile {
            id: "staff_001".to_string(),
            residency_status: ResidencyStatus::ResidentCasual,
        };
        let json = serde_json::to_string(&staff).unwrap();
        let deserialized: StaffProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(staff, deserialized);
    }
}
