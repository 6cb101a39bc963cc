//! Role-to-entry-view dispatch contract.
//!
//! The portal UI owns the actual views; this crate only fixes the mapping so
//! that routing is total over the closed [`Role`] set. There is no default
//! arm anywhere: a role without a view is a compile error, not a silent
//! no-op at login time.

use serde::{Deserialize, Serialize};

use crate::{Role, Session};

/// Entry view for an authenticated staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewDescriptor {
    AdminView,
    DoctorView,
    ReceptionistView,
}

/// Pure mapping from a session's role to its entry view.
pub fn route_for(session: &Session) -> ViewDescriptor {
    match session.role {
        Role::Admin => ViewDescriptor::AdminView,
        Role::Doctor => ViewDescriptor::DoctorView,
        Role::Receptionist => ViewDescriptor::ReceptionistView,
    }
}

#[cfg(test)]
mod tests {
    use clinicport_core::{ClinicId, StaffId};

    use super::*;

    fn session(role: Role) -> Session {
        Session {
            account_id: StaffId::new(),
            clinic_id: ClinicId::new(),
            role,
            display_name: "Dr. Smith".to_string(),
        }
    }

    #[test]
    fn every_role_routes_to_its_own_view() {
        assert_eq!(route_for(&session(Role::Admin)), ViewDescriptor::AdminView);
        assert_eq!(route_for(&session(Role::Doctor)), ViewDescriptor::DoctorView);
        assert_eq!(
            route_for(&session(Role::Receptionist)),
            ViewDescriptor::ReceptionistView
        );
    }
}
