//! Staff account identity, role and lifecycle status.

use serde::{Deserialize, Serialize};

use clinicport_core::{ClinicId, StaffId};

/// Staff role within a clinic.
///
/// This is a closed enumeration on purpose: routing and policy match on it
/// exhaustively, so an unrecognized role cannot exist past deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
    Receptionist,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Receptionist => "receptionist",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Staff account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Account is active and can authenticate.
    #[default]
    Active,
    /// Account exists but has been deactivated (e.g. staff member left).
    Inactive,
    /// Account is temporarily suspended by the clinic admin.
    Suspended,
    /// Account is blocked and cannot authenticate.
    Blocked,
}

impl AccountStatus {
    /// Whether this status permits authentication.
    ///
    /// All non-active states fail login identically; the distinction between
    /// them is administrative and never surfaces to the login screen.
    pub fn permits_login(self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}

impl core::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AccountStatus::Active => write!(f, "Active"),
            AccountStatus::Inactive => write!(f, "Inactive"),
            AccountStatus::Suspended => write!(f, "Suspended"),
            AccountStatus::Blocked => write!(f, "Blocked"),
        }
    }
}

/// A staff account as the resolver sees it.
///
/// # Invariants
/// - An account belongs to exactly one clinic (`clinic_id` is the
///   tenant-isolation boundary and is immutable).
/// - `username` is unique per clinic, never globally.
/// - `credential_hash` is opaque here; only a [`crate::CredentialVerifier`]
///   interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIdentity {
    pub id: StaffId,
    pub clinic_id: ClinicId,
    pub username: String,
    pub display_name: String,
    pub credential_hash: String,
    pub role: Role,
    pub status: AccountStatus,
}
