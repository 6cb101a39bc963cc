use serde::{Deserialize, Serialize};

use clinicport_core::ClinicId;

/// Operational status of a clinic (tenant lifecycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClinicStatus {
    Active,
    Suspended,
}

impl ClinicStatus {
    /// Whether staff of this clinic may authenticate at all.
    pub fn is_operational(self) -> bool {
        matches!(self, ClinicStatus::Active)
    }
}

impl core::fmt::Display for ClinicStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ClinicStatus::Active => write!(f, "Active"),
            ClinicStatus::Suspended => write!(f, "Suspended"),
        }
    }
}

/// A clinic as the resolver sees it: identity plus the status gate.
///
/// Clinics are created and managed by tenant-management functionality outside
/// this crate; the resolver only ever reads them. `code` is the tenant lookup
/// key and is unique across the deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicIdentity {
    pub id: ClinicId,
    pub code: String,
    pub name: String,
    pub status: ClinicStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_clinics_are_operational() {
        assert!(ClinicStatus::Active.is_operational());
        assert!(!ClinicStatus::Suspended.is_operational());
    }
}
