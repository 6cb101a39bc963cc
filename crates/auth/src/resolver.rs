//! The multi-tenant authentication resolver.
//!
//! One call, one terminal [`AuthOutcome`]. The checks run in a fixed order
//! and every step short-circuits:
//!
//! 1. tenant lookup (accounts are namespaced per clinic, so there is no
//!    account lookup without a resolved tenant),
//! 2. tenant status gate,
//! 3. account lookup within the tenant,
//! 4. account status gate,
//! 5. credential verification.
//!
//! "No such username" and "wrong password" collapse into the same
//! [`AuthOutcome::InvalidCredentials`] so a caller cannot enumerate usernames
//! within a clinic. Status gates run *before* verification: a suspended
//! clinic or blocked account never learns whether the supplied password was
//! correct, and the verifier is never invoked on those paths.

use tracing::debug;

use crate::{
    AccountDirectory, AuthOutcome, CredentialVerifier, DirectoryError, Session, TenantDirectory,
};

/// Stateless orchestrator over the tenant directory, account directory and
/// credential verifier.
///
/// `resolve` takes `&self` and touches no shared mutable state, so one
/// resolver can serve concurrent callers without coordination. Each call is
/// a fresh pair of lookups: a just-suspended clinic or just-blocked account
/// is reflected on the very next attempt.
#[derive(Debug, Clone)]
pub struct AuthResolver<T, A, V> {
    tenants: T,
    accounts: A,
    verifier: V,
}

impl<T, A, V> AuthResolver<T, A, V>
where
    T: TenantDirectory,
    A: AccountDirectory,
    V: CredentialVerifier,
{
    pub fn new(tenants: T, accounts: A, verifier: V) -> Self {
        Self {
            tenants,
            accounts,
            verifier,
        }
    }

    /// Resolve a `(clinic code, username, secret)` triple to a terminal
    /// outcome.
    ///
    /// Blank inputs are a caller precondition: the login form rejects them
    /// before this layer, and they are not themselves classified as
    /// `InvalidCredentials`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] when a collaborator faults (directory
    /// unreachable, corrupt record). That category propagates untouched —
    /// it is an infrastructure failure, not an authentication decision.
    pub fn resolve(
        &self,
        clinic_code: &str,
        username: &str,
        secret: &str,
    ) -> Result<AuthOutcome, DirectoryError> {
        debug_assert!(!clinic_code.trim().is_empty(), "caller must reject blank clinic code");
        debug_assert!(!username.trim().is_empty(), "caller must reject blank username");
        debug_assert!(!secret.is_empty(), "caller must reject empty secret");

        let Some(clinic) = self.tenants.find_by_code(clinic_code)? else {
            debug!(clinic_code, "login attempt against unknown clinic code");
            return Ok(AuthOutcome::ClinicNotFound {
                attempted_code: clinic_code.to_string(),
            });
        };

        if !clinic.status.is_operational() {
            debug!(clinic_code, %clinic.id, "login attempt against suspended clinic");
            return Ok(AuthOutcome::ClinicSuspended);
        }

        let Some(account) = self
            .accounts
            .find_by_clinic_and_username(clinic.id, username)?
        else {
            debug!(clinic_code, "login attempt with unknown username");
            return Ok(AuthOutcome::InvalidCredentials);
        };

        debug_assert_eq!(account.clinic_id, clinic.id, "account leaked across tenants");

        // Status gate before verification: a non-active account must not
        // learn whether its password was correct.
        if !account.status.permits_login() {
            debug!(clinic_code, %account.id, status = %account.status, "login attempt on gated account");
            return Ok(AuthOutcome::AccountBlocked);
        }

        if !self.verifier.matches(secret, &account.credential_hash)? {
            debug!(clinic_code, %account.id, "credential mismatch");
            return Ok(AuthOutcome::InvalidCredentials);
        }

        debug!(clinic_code, %account.id, role = %account.role, "login succeeded");
        Ok(AuthOutcome::Success {
            session: Session {
                account_id: account.id,
                clinic_id: clinic.id,
                role: account.role,
                display_name: account.display_name,
            },
        })
    }
}
