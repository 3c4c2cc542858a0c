use serde::{Deserialize, Serialize};

/// Acting capacity a user operates under in the UI.
///
/// The set is closed: the access matrix in [`crate::tilgang`] is exhaustive
/// over these four roles, so a permission check never needs a remote lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Applicant (lowest privilege, the anonymous baseline).
    #[serde(rename = "Søker")]
    Soker,

    /// Caseworker processing applications.
    #[serde(rename = "Søknadsbehandler")]
    Soknadsbehandler,

    /// Admission-round leader at an organisation.
    #[serde(rename = "Opptaksleder")]
    Opptaksleder,

    /// Full platform administrator.
    #[serde(rename = "Administrator")]
    Administrator,
}

impl Role {
    /// Role selected when no session is present.
    pub const BASELINE: Role = Role::Soker;

    pub const ALL: [Role; 4] = [
        Role::Soker,
        Role::Soknadsbehandler,
        Role::Opptaksleder,
        Role::Administrator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Soker => "Søker",
            Role::Soknadsbehandler => "Søknadsbehandler",
            Role::Opptaksleder => "Opptaksleder",
            Role::Administrator => "Administrator",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a backend role name onto the UI role set.
///
/// The backend reports SCREAMING_SNAKE role IDs, but older payloads carry the
/// display form, so both spellings are accepted. An unrecognized name maps to
/// the baseline role and logs a warning; it must never abort a login.
pub fn map_backend_role(backend_role: &str) -> Role {
    match backend_role {
        "ADMINISTRATOR" | "Administrator" => Role::Administrator,
        "OPPTAKSLEDER" | "Opptaksleder" => Role::Opptaksleder,
        "SOKNADSBEHANDLER" | "Søknadsbehandler" => Role::Soknadsbehandler,
        "SOKER" | "Søker" => Role::Soker,
        other => {
            tracing::warn!(backend_role = other, "unknown backend role, falling back to baseline");
            Role::BASELINE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_backend_ids_and_display_forms() {
        assert_eq!(map_backend_role("ADMINISTRATOR"), Role::Administrator);
        assert_eq!(map_backend_role("Administrator"), Role::Administrator);
        assert_eq!(map_backend_role("OPPTAKSLEDER"), Role::Opptaksleder);
        assert_eq!(map_backend_role("SOKNADSBEHANDLER"), Role::Soknadsbehandler);
        assert_eq!(map_backend_role("Søknadsbehandler"), Role::Soknadsbehandler);
        assert_eq!(map_backend_role("SOKER"), Role::Soker);
    }

    #[test]
    fn unknown_backend_role_falls_back_to_baseline() {
        assert_eq!(map_backend_role("SUPERUSER"), Role::BASELINE);
        assert_eq!(map_backend_role(""), Role::BASELINE);
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&Role::Soknadsbehandler).unwrap();
        assert_eq!(json, "\"Søknadsbehandler\"");

        let back: Role = serde_json::from_str("\"Søker\"").unwrap();
        assert_eq!(back, Role::Soker);
    }
}
