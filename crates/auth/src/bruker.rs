//! Authenticated identity as reported by the login exchange.

use serde::{Deserialize, Serialize};

use strix_core::{BrukerId, OrganisasjonId, RolleId};

use crate::{map_backend_role, Role};

/// The authenticated user behind a session.
///
/// Field names follow the wire shape of the `login` mutation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bruker {
    pub id: BrukerId,
    pub email: String,
    pub navn: String,
    #[serde(default)]
    pub roller: Vec<BrukerRolle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organisasjon: Option<OrganisasjonRef>,
}

/// A role assignment on the identity (backend role ID + name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrukerRolle {
    pub id: RolleId,
    pub navn: String,
}

/// Slim organisation reference embedded in the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganisasjonRef {
    pub id: OrganisasjonId,
    pub navn: String,
}

impl Bruker {
    /// The UI role derived from the first assigned backend role.
    ///
    /// An identity without role assignments behaves like an unknown backend
    /// role: warn and fall back to the baseline.
    pub fn primary_role(&self) -> Role {
        match self.roller.first() {
            Some(rolle) => map_backend_role(&rolle.navn),
            None => {
                tracing::warn!(bruker = %self.id, "identity has no role assignments");
                Role::BASELINE
            }
        }
    }
}
