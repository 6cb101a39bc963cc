//! In-memory directories for tests and dev.
//!
//! Lock poisoning surfaces as [`DirectoryError::Unavailable`] rather than an
//! empty answer: a half-visible directory must fault, not deny.

use std::collections::HashMap;
use std::sync::RwLock;

use clinicport_auth::{
    AccountDirectory, AccountIdentity, ClinicIdentity, DirectoryError, SuperAdminDirectory,
    SuperAdminIdentity, TenantDirectory,
};
use clinicport_core::ClinicId;

fn poisoned(which: &str) -> DirectoryError {
    DirectoryError::Unavailable(format!("{which} directory lock poisoned"))
}

/// Clinic registry keyed by clinic code.
#[derive(Debug, Default)]
pub struct InMemoryTenantDirectory {
    inner: RwLock<HashMap<String, ClinicIdentity>>,
}

impl InMemoryTenantDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a clinic. The code is the key; re-inserting under
    /// the same code models a tenant-management update.
    pub fn upsert(&self, clinic: ClinicIdentity) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(clinic.code.clone(), clinic);
        }
    }
}

impl TenantDirectory for InMemoryTenantDirectory {
    fn find_by_code(&self, code: &str) -> Result<Option<ClinicIdentity>, DirectoryError> {
        let map = self.inner.read().map_err(|_| poisoned("tenant"))?;
        Ok(map.get(code).cloned())
    }
}

/// Staff accounts keyed by `(clinic, username)`.
///
/// The composite key is the tenant-isolation boundary: the same username
/// under two clinics is two unrelated entries.
#[derive(Debug, Default)]
pub struct InMemoryAccountDirectory {
    inner: RwLock<HashMap<(ClinicId, String), AccountIdentity>>,
}

impl InMemoryAccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, account: AccountIdentity) {
        if let Ok(mut map) = self.inner.write() {
            map.insert((account.clinic_id, account.username.clone()), account);
        }
    }

    /// Remove every account of a clinic (tenant teardown support).
    pub fn clear_clinic(&self, clinic_id: ClinicId) {
        if let Ok(mut map) = self.inner.write() {
            map.retain(|(c, _), _| *c != clinic_id);
        }
    }
}

impl AccountDirectory for InMemoryAccountDirectory {
    fn find_by_clinic_and_username(
        &self,
        clinic_id: ClinicId,
        username: &str,
    ) -> Result<Option<AccountIdentity>, DirectoryError> {
        let map = self.inner.read().map_err(|_| poisoned("account"))?;
        Ok(map.get(&(clinic_id, username.to_string())).cloned())
    }
}

/// Global super-admin registry keyed by username.
#[derive(Debug, Default)]
pub struct InMemorySuperAdminDirectory {
    inner: RwLock<HashMap<String, SuperAdminIdentity>>,
}

impl InMemorySuperAdminDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&self, admin: SuperAdminIdentity) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(admin.username.clone(), admin);
        }
    }
}

impl SuperAdminDirectory for InMemorySuperAdminDirectory {
    fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<SuperAdminIdentity>, DirectoryError> {
        let map = self.inner.read().map_err(|_| poisoned("super-admin"))?;
        Ok(map.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use clinicport_auth::{AccountStatus, ClinicStatus, Role};
    use clinicport_core::StaffId;

    use super::*;

    fn clinic(code: &str) -> ClinicIdentity {
        ClinicIdentity {
            id: ClinicId::new(),
            code: code.to_string(),
            name: format!("{code} Clinic"),
            status: ClinicStatus::Active,
        }
    }

    fn account(clinic_id: ClinicId, username: &str) -> AccountIdentity {
        AccountIdentity {
            id: StaffId::new(),
            clinic_id,
            username: username.to_string(),
            display_name: username.to_string(),
            credential_hash: "hash".to_string(),
            role: Role::Receptionist,
            status: AccountStatus::Active,
        }
    }

    #[test]
    fn upsert_replaces_clinic_under_the_same_code() {
        let dir = InMemoryTenantDirectory::new();
        let mut cln = clinic("CLN1");
        dir.upsert(cln.clone());

        cln.status = ClinicStatus::Suspended;
        dir.upsert(cln.clone());

        let found = dir.find_by_code("CLN1").unwrap().unwrap();
        assert_eq!(found.status, ClinicStatus::Suspended);
        assert_eq!(found.id, cln.id);
    }

    #[test]
    fn accounts_with_the_same_username_stay_separate_per_clinic() {
        let dir = InMemoryAccountDirectory::new();
        let a = ClinicId::new();
        let b = ClinicId::new();
        dir.upsert(account(a, "bob"));
        dir.upsert(account(b, "bob"));

        let found_a = dir.find_by_clinic_and_username(a, "bob").unwrap().unwrap();
        let found_b = dir.find_by_clinic_and_username(b, "bob").unwrap().unwrap();
        assert_ne!(found_a.id, found_b.id);
    }

    #[test]
    fn clear_clinic_removes_only_that_clinics_accounts() {
        let dir = InMemoryAccountDirectory::new();
        let a = ClinicId::new();
        let b = ClinicId::new();
        dir.upsert(account(a, "bob"));
        dir.upsert(account(b, "carol"));

        dir.clear_clinic(a);

        assert!(dir.find_by_clinic_and_username(a, "bob").unwrap().is_none());
        assert!(dir.find_by_clinic_and_username(b, "carol").unwrap().is_some());
    }

    #[test]
    fn missing_entries_answer_none_not_error() {
        let tenants = InMemoryTenantDirectory::new();
        assert_eq!(tenants.find_by_code("NOPE").unwrap(), None);

        let admins = InMemorySuperAdminDirectory::new();
        assert_eq!(admins.find_by_username("ghost").unwrap(), None);
    }
}
