//! `clinicport-auth` — multi-tenant staff authentication boundary.
//!
//! This crate is intentionally decoupled from UI and storage: directories and
//! credential verification are contracts implemented elsewhere, and every
//! login attempt resolves to exactly one terminal [`AuthOutcome`].

pub mod account;
pub mod clinic;
pub mod directory;
pub mod outcome;
pub mod resolver;
pub mod router;
pub mod superadmin;

pub use account::{AccountIdentity, AccountStatus, Role};
pub use clinic::{ClinicIdentity, ClinicStatus};
pub use directory::{AccountDirectory, CredentialVerifier, DirectoryError, TenantDirectory};
pub use outcome::{AuthOutcome, Session};
pub use resolver::AuthResolver;
pub use router::{route_for, ViewDescriptor};
pub use superadmin::{
    SuperAdminDirectory, SuperAdminIdentity, SuperAdminOutcome, SuperAdminResolver,
    SuperAdminSession,
};
