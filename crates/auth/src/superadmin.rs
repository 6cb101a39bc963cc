//! Platform super-admin authentication.
//!
//! Super-admins manage clinics themselves and live in a single global
//! namespace: no clinic code, no role. The resolution mirrors the staff
//! path minus the tenant gates, with the same collapse of "unknown
//! username" and "wrong password" into one outcome.

use serde::{Deserialize, Serialize};
use tracing::debug;

use clinicport_core::StaffId;

use crate::{CredentialVerifier, DirectoryError};

/// A platform administrator record as the resolver sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperAdminIdentity {
    pub id: StaffId,
    pub username: String,
    pub display_name: String,
    pub credential_hash: String,
}

/// Authenticated super-admin identity handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperAdminSession {
    pub admin_id: StaffId,
    pub display_name: String,
}

/// Terminal result of a super-admin login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuperAdminOutcome {
    Success { session: SuperAdminSession },
    /// Unknown username or wrong password, indistinguishable to the caller.
    InvalidCredentials,
}

impl SuperAdminOutcome {
    pub fn session(&self) -> Option<&SuperAdminSession> {
        match self {
            SuperAdminOutcome::Success { session } => Some(session),
            SuperAdminOutcome::InvalidCredentials => None,
        }
    }
}

/// Global (non-tenant) super-admin lookup.
pub trait SuperAdminDirectory: Send + Sync {
    fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<SuperAdminIdentity>, DirectoryError>;
}

impl<T> SuperAdminDirectory for std::sync::Arc<T>
where
    T: SuperAdminDirectory + ?Sized,
{
    fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<SuperAdminIdentity>, DirectoryError> {
        (**self).find_by_username(username)
    }
}

/// Stateless resolver for the global super-admin namespace.
#[derive(Debug, Clone)]
pub struct SuperAdminResolver<D, V> {
    admins: D,
    verifier: V,
}

impl<D, V> SuperAdminResolver<D, V>
where
    D: SuperAdminDirectory,
    V: CredentialVerifier,
{
    pub fn new(admins: D, verifier: V) -> Self {
        Self { admins, verifier }
    }

    /// Resolve a `(username, secret)` pair to a terminal outcome.
    ///
    /// # Errors
    ///
    /// Infrastructure faults from the directory or verifier propagate as
    /// [`DirectoryError`], never as `InvalidCredentials`.
    pub fn resolve(
        &self,
        username: &str,
        secret: &str,
    ) -> Result<SuperAdminOutcome, DirectoryError> {
        debug_assert!(!username.trim().is_empty(), "caller must reject blank username");
        debug_assert!(!secret.is_empty(), "caller must reject empty secret");

        let Some(admin) = self.admins.find_by_username(username)? else {
            debug!("super-admin login attempt with unknown username");
            return Ok(SuperAdminOutcome::InvalidCredentials);
        };

        if !self.verifier.matches(secret, &admin.credential_hash)? {
            debug!(%admin.id, "super-admin credential mismatch");
            return Ok(SuperAdminOutcome::InvalidCredentials);
        }

        debug!(%admin.id, "super-admin login succeeded");
        Ok(SuperAdminOutcome::Success {
            session: SuperAdminSession {
                admin_id: admin.id,
                display_name: admin.display_name,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticAdmins(Vec<SuperAdminIdentity>);

    impl SuperAdminDirectory for StaticAdmins {
        fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<SuperAdminIdentity>, DirectoryError> {
            Ok(self.0.iter().find(|a| a.username == username).cloned())
        }
    }

    struct EqVerifier;

    impl CredentialVerifier for EqVerifier {
        fn matches(&self, secret: &str, stored_hash: &str) -> Result<bool, DirectoryError> {
            Ok(secret == stored_hash)
        }
    }

    fn admins() -> StaticAdmins {
        StaticAdmins(vec![SuperAdminIdentity {
            id: StaffId::new(),
            username: "root".to_string(),
            display_name: "Platform Operator".to_string(),
            credential_hash: "root secret".to_string(),
        }])
    }

    #[test]
    fn correct_credentials_resolve_to_a_session() {
        let resolver = SuperAdminResolver::new(admins(), EqVerifier);
        let outcome = resolver.resolve("root", "root secret").unwrap();
        assert_eq!(outcome.session().unwrap().display_name, "Platform Operator");
    }

    #[test]
    fn unknown_username_and_wrong_password_are_indistinguishable() {
        let resolver = SuperAdminResolver::new(admins(), EqVerifier);
        let unknown = resolver.resolve("ghost", "root secret").unwrap();
        let wrong = resolver.resolve("root", "nope").unwrap();
        assert_eq!(unknown, SuperAdminOutcome::InvalidCredentials);
        assert_eq!(unknown, wrong);
    }

    #[test]
    fn directory_fault_propagates() {
        struct Broken;
        impl SuperAdminDirectory for Broken {
            fn find_by_username(
                &self,
                _username: &str,
            ) -> Result<Option<SuperAdminIdentity>, DirectoryError> {
                Err(DirectoryError::Unavailable("timeout".into()))
            }
        }

        let resolver = SuperAdminResolver::new(Broken, EqVerifier);
        assert!(resolver.resolve("root", "root secret").is_err());
    }
}
