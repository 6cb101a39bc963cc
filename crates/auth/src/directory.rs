//! Directory and verifier contracts consumed by the resolvers.
//!
//! Implementations live outside this crate (SQL-backed in production,
//! in-memory in `clinicport-directory`). Lookups may block on IO; the
//! resolver adds no timeouts or retries of its own.

use std::sync::Arc;

use thiserror::Error;

use clinicport_core::ClinicId;

use crate::{AccountIdentity, ClinicIdentity};

/// Infrastructure fault raised by a directory or verifier.
///
/// This is a separate category from authentication decisions and must never
/// be coerced into [`crate::AuthOutcome::InvalidCredentials`]: a directory
/// that cannot answer has not denied anyone. Callers present a generic
/// "try again later" message for this category.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// The backing store could not be reached or answered abnormally.
    #[error("directory unavailable: {0}")]
    Unavailable(String),

    /// A stored record was unreadable (e.g. a credential hash that does not
    /// parse). Indicates data corruption, not a wrong password.
    #[error("directory record corrupt: {0}")]
    Corrupt(String),
}

/// Tenant lookup by clinic code.
pub trait TenantDirectory: Send + Sync {
    fn find_by_code(&self, code: &str) -> Result<Option<ClinicIdentity>, DirectoryError>;
}

/// Account lookup, namespaced by clinic.
///
/// There is deliberately no lookup by username alone: an account can only be
/// reached through its owning clinic.
pub trait AccountDirectory: Send + Sync {
    fn find_by_clinic_and_username(
        &self,
        clinic_id: ClinicId,
        username: &str,
    ) -> Result<Option<AccountIdentity>, DirectoryError>;
}

/// Opaque one-way credential verification primitive.
pub trait CredentialVerifier: Send + Sync {
    /// Whether `secret` matches `stored_hash`. A hash that cannot be
    /// interpreted is a [`DirectoryError::Corrupt`], not a mismatch.
    fn matches(&self, secret: &str, stored_hash: &str) -> Result<bool, DirectoryError>;
}

impl<T> TenantDirectory for Arc<T>
where
    T: TenantDirectory + ?Sized,
{
    fn find_by_code(&self, code: &str) -> Result<Option<ClinicIdentity>, DirectoryError> {
        (**self).find_by_code(code)
    }
}

impl<T> AccountDirectory for Arc<T>
where
    T: AccountDirectory + ?Sized,
{
    fn find_by_clinic_and_username(
        &self,
        clinic_id: ClinicId,
        username: &str,
    ) -> Result<Option<AccountIdentity>, DirectoryError> {
        (**self).find_by_clinic_and_username(clinic_id, username)
    }
}

impl<T> CredentialVerifier for Arc<T>
where
    T: CredentialVerifier + ?Sized,
{
    fn matches(&self, secret: &str, stored_hash: &str) -> Result<bool, DirectoryError> {
        (**self).matches(secret, stored_hash)
    }
}
