//! Infrastructure implementations of the directory and verifier contracts.
//!
//! In-memory directories back tests and dev setups; production deployments
//! supply SQL-backed implementations of the same traits, owning their own
//! connection pooling and retry policy.

pub mod in_memory;
pub mod verifier;

pub use in_memory::{InMemoryAccountDirectory, InMemorySuperAdminDirectory, InMemoryTenantDirectory};
pub use verifier::Argon2Verifier;
