use serde::{Deserialize, Serialize};

/// Named capability checked by the views.
///
/// Permissions are derived from the selected role, never stored. The wire
/// strings match the names the views pass to `has_permission`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    ViewOrganisations,
    CreateOrganisation,
    EditOrganisation,
    DeleteOrganisation,
    AdminOrganisations,
    ManageOpptak,
    ManageUtdanninger,
}

impl Permission {
    pub const ALL: [Permission; 7] = [
        Permission::ViewOrganisations,
        Permission::CreateOrganisation,
        Permission::EditOrganisation,
        Permission::DeleteOrganisation,
        Permission::AdminOrganisations,
        Permission::ManageOpptak,
        Permission::ManageUtdanninger,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewOrganisations => "VIEW_ORGANISATIONS",
            Permission::CreateOrganisation => "CREATE_ORGANISATION",
            Permission::EditOrganisation => "EDIT_ORGANISATION",
            Permission::DeleteOrganisation => "DELETE_ORGANISATION",
            Permission::AdminOrganisations => "ADMIN_ORGANISATIONS",
            Permission::ManageOpptak => "MANAGE_OPPTAK",
            Permission::ManageUtdanninger => "MANAGE_UTDANNINGER",
        }
    }

    /// Parse a permission name; unknown names yield `None` so the caller can
    /// deny them instead of guessing.
    pub fn parse(name: &str) -> Option<Permission> {
        Permission::ALL.iter().copied().find(|p| p.as_str() == name)
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_every_permission() {
        for p in Permission::ALL {
            assert_eq!(Permission::parse(p.as_str()), Some(p));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_case_mismatch() {
        assert_eq!(Permission::parse("UNKNOWN_PERMISSION"), None);
        assert_eq!(Permission::parse("view_organisations"), None);
        assert_eq!(Permission::parse(""), None);
    }

    #[test]
    fn serde_matches_wire_names() {
        let json = serde_json::to_string(&Permission::ManageOpptak).unwrap();
        assert_eq!(json, "\"MANAGE_OPPTAK\"");
    }
}
