//! Terminal outcomes of an authentication attempt.

use serde::{Deserialize, Serialize};

use clinicport_core::{ClinicId, StaffId};

use crate::Role;

/// The authenticated identity handed to the caller after a successful
/// resolution.
///
/// Immutable value; the resolver produces it once and never retains it. The
/// UI layer owns it for the remainder of the interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub account_id: StaffId,
    pub clinic_id: ClinicId,
    pub role: Role,
    pub display_name: String,
}

/// Terminal result of one login attempt.
///
/// Exactly one variant per attempt. The failure variants are *expected*
/// outcomes returned for display, never raised as errors; infrastructure
/// faults travel separately as [`crate::DirectoryError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuthOutcome {
    /// All gates passed.
    Success { session: Session },

    /// The clinic code did not resolve to any clinic.
    ClinicNotFound { attempted_code: String },

    /// The clinic resolved but is not operational.
    ClinicSuspended,

    /// Either no such username in this clinic, or the password did not
    /// match. Deliberately indistinguishable to the caller.
    InvalidCredentials,

    /// The account resolved within the correct clinic but its status
    /// disallows login. Covers Inactive, Suspended and Blocked; the internal
    /// status is not re-exposed.
    AccountBlocked,
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success { .. })
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthOutcome::Success { session } => Some(session),
            _ => None,
        }
    }

    /// The one human-readable message for this outcome.
    ///
    /// Messages reveal nothing beyond what their variant already implies; in
    /// particular `InvalidCredentials` never hints at whether the username
    /// existed.
    pub fn user_message(&self) -> String {
        match self {
            AuthOutcome::Success { .. } => "Login successful.".to_string(),
            AuthOutcome::ClinicNotFound { attempted_code } => {
                format!("The clinic with code '{attempted_code}' does not exist.")
            }
            AuthOutcome::ClinicSuspended => {
                "This clinic has been suspended. Please contact support.".to_string()
            }
            AuthOutcome::InvalidCredentials => {
                "Invalid username or password. Please try again.".to_string()
            }
            AuthOutcome::AccountBlocked => {
                "Your account has been blocked. Please contact your clinic administrator."
                    .to_string()
            }
        }
    }
}
