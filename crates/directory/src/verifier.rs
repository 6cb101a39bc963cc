//! Argon2id-backed credential verification.

use argon2::password_hash::SaltString;
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier},
};

use clinicport_auth::{CredentialVerifier, DirectoryError};

/// One-way credential primitive over Argon2id.
///
/// Parameters: 19 MiB memory, 2 iterations, 1 lane. The resolver only ever
/// calls [`CredentialVerifier::matches`]; `hash` exists for provisioning and
/// fixtures.
pub struct Argon2Verifier {
    argon2: Argon2<'static>,
}

impl Argon2Verifier {
    pub fn new() -> Self {
        let params = Params::new(19_456, 2, 1, Some(32))
            .expect("static Argon2 parameters are valid");
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Hash a secret for storage in an account record.
    pub fn hash(&self, secret: &str) -> Result<String, DirectoryError> {
        let salt = SaltString::generate(&mut rand::rngs::OsRng);
        let hash = self
            .argon2
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| DirectoryError::Unavailable(format!("hashing failed: {e}")))?;
        Ok(hash.to_string())
    }
}

impl Default for Argon2Verifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialVerifier for Argon2Verifier {
    fn matches(&self, secret: &str, stored_hash: &str) -> Result<bool, DirectoryError> {
        // An unparseable stored hash is corrupt data, not a wrong password.
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| DirectoryError::Corrupt(format!("stored credential hash: {e}")))?;
        match self.argon2.verify_password(secret.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(DirectoryError::Corrupt(format!(
                "stored credential hash: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let verifier = Argon2Verifier::new();
        let hash = verifier.hash("correct horse").unwrap();

        assert!(verifier.matches("correct horse", &hash).unwrap());
        assert!(!verifier.matches("wrong horse", &hash).unwrap());
    }

    #[test]
    fn corrupt_stored_hash_is_a_fault_not_a_mismatch() {
        let verifier = Argon2Verifier::new();
        let result = verifier.matches("anything", "not-a-phc-string");
        assert!(matches!(result, Err(DirectoryError::Corrupt(_))));
    }
}
