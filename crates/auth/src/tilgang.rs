//! The fixed role/permission access matrix.
//!
//! Closed world: every check is answerable from the static table below.
//! Administrator holds every listed permission; the other roles are
//! enumerated explicitly per permission, with no inheritance between them.

use strix_core::{DomainError, DomainResult};

use crate::{Permission, Role};

const SOKER: &[Permission] = &[Permission::ViewOrganisations];

const SOKNADSBEHANDLER: &[Permission] = &[Permission::ViewOrganisations];

const OPPTAKSLEDER: &[Permission] = &[
    Permission::ViewOrganisations,
    Permission::ManageOpptak,
    Permission::ManageUtdanninger,
];

const ADMINISTRATOR: &[Permission] = &Permission::ALL;

/// Permissions granted to a role.
pub fn permissions_for(role: Role) -> &'static [Permission] {
    match role {
        Role::Soker => SOKER,
        Role::Soknadsbehandler => SOKNADSBEHANDLER,
        Role::Opptaksleder => OPPTAKSLEDER,
        Role::Administrator => ADMINISTRATOR,
    }
}

/// Whether `role` holds the typed permission.
pub fn granted(role: Role, permission: Permission) -> bool {
    permissions_for(role).contains(&permission)
}

/// Whether `role` holds the permission named by `permission`.
///
/// Unknown permission names resolve to `false` for every role. Pure, no IO,
/// cheap enough to call on every render.
pub fn has_permission(role: Role, permission: &str) -> bool {
    match Permission::parse(permission) {
        Some(p) => granted(role, p),
        None => false,
    }
}

/// Structural self-check of the access matrix, run once at store init.
///
/// Asserts the invariants the table is designed around: Administrator's set
/// is a superset of every other role's, and every role can at least view
/// organisations (the sidebar entry point).
pub fn verify_access_matrix() -> DomainResult<()> {
    for role in Role::ALL {
        for p in permissions_for(role) {
            if !granted(Role::Administrator, *p) {
                return Err(DomainError::invariant(format!(
                    "administrator is missing '{p}' granted to {role}"
                )));
            }
        }

        if !granted(role, Permission::ViewOrganisations) {
            return Err(DomainError::invariant(format!(
                "{role} cannot view organisations"
            )));
        }
    }

    Ok(())
}
