//! The session store: selected role, optional session, permission checks.

use serde_json::json;
use thiserror::Error;

use strix_auth::{has_permission, verify_access_matrix, Bruker, Role};
use strix_core::DomainResult;
use strix_gateway::{Gateway, GatewayError};

use crate::login::{LoginInput, LoginPayload, LOGIN_MUTATION, TEST_PASSWORD};
use crate::storage::{CredentialStore, StoredCredentials};

/// Authenticated-identity state: bearer token plus the identity it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub bruker: Bruker,
}

/// Failure of the login exchange.
///
/// Propagated to the login form verbatim; prior session state stays
/// untouched, there is no partial login state.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error(transparent)]
    Exchange(#[from] GatewayError),
}

/// Single source of truth for the acting role and the authenticated session.
///
/// Mutated only by discrete user actions (`set_selected_role`, `login`,
/// `logout`), which the surrounding UI issues sequentially; last write wins.
#[derive(Debug)]
pub struct SessionStore {
    storage: Box<dyn CredentialStore>,
    session: Option<Session>,
    selected_role: Role,
}

impl SessionStore {
    /// Create an anonymous store at the baseline role.
    ///
    /// Verifies the access matrix once so a malformed table is caught at
    /// startup rather than at the first render-time check.
    pub fn new(storage: Box<dyn CredentialStore>) -> DomainResult<Self> {
        verify_access_matrix()?;
        Ok(Self {
            storage,
            session: None,
            selected_role: Role::BASELINE,
        })
    }

    pub fn selected_role(&self) -> Role {
        self.selected_role
    }

    /// Overwrite the selected role unconditionally.
    ///
    /// Deliberately not validated against the session: the UI lets a logged-in
    /// user simulate any role. Subsequent permission checks reflect the new
    /// role immediately.
    pub fn set_selected_role(&mut self, role: Role) {
        self.selected_role = role;
    }

    /// Whether the current role holds the named permission.
    ///
    /// Pure lookup against the fixed matrix; unknown names are denied.
    pub fn has_permission(&self, permission: &str) -> bool {
        has_permission(self.selected_role, permission)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn bruker(&self) -> Option<&Bruker> {
        self.session.as_ref().map(|s| &s.bruker)
    }

    /// Exchange an email for a session via the gateway.
    ///
    /// On success the credential and identity are persisted (best-effort) and
    /// the selected role follows the identity's first assigned role. On
    /// failure nothing changes.
    pub async fn login(&mut self, gateway: &Gateway, email: &str) -> Result<(), LoginError> {
        let variables = json!({
            "input": LoginInput {
                email,
                passord: TEST_PASSWORD,
            }
        });

        let payload: LoginPayload = gateway.request(LOGIN_MUTATION, variables, None).await?;
        let bruker = payload.login.bruker;
        let token = payload.login.token;

        match serde_json::to_string(&bruker) {
            Ok(bruker_json) => {
                let stored = StoredCredentials {
                    token: token.clone(),
                    bruker_json,
                };
                if let Err(err) = self.storage.save(&stored) {
                    tracing::warn!(error = %err, "failed to persist session, continuing in-memory");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize identity, continuing in-memory");
            }
        }

        self.selected_role = bruker.primary_role();
        self.session = Some(Session { token, bruker });

        tracing::info!(role = %self.selected_role, "login succeeded");
        Ok(())
    }

    /// Clear the session, durable storage, and reset to the baseline role.
    ///
    /// Best-effort local clear; there is no failure mode.
    pub fn logout(&mut self) {
        self.session = None;
        self.storage.clear();
        self.selected_role = Role::BASELINE;
    }

    /// Reinstate a session from durable storage, called once at startup.
    ///
    /// Missing or malformed entries leave the store anonymous at the
    /// baseline; bad local state must never crash initialization.
    pub fn restore(&mut self) {
        let Some(stored) = self.storage.load() else {
            return;
        };

        match serde_json::from_str::<Bruker>(&stored.bruker_json) {
            Ok(bruker) => {
                self.selected_role = bruker.primary_role();
                self.session = Some(Session {
                    token: stored.token,
                    bruker,
                });
                tracing::info!(role = %self.selected_role, "session restored");
            }
            Err(err) => {
                tracing::warn!(error = %err, "stored identity is malformed, staying anonymous");
            }
        }
    }

    /// Drop the in-memory session without touching durable storage, so the
    /// next start can still `restore`.
    pub fn teardown(&mut self) {
        self.session = None;
        self.selected_role = Role::BASELINE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::storage::InMemoryCredentialStore;

    fn store_with(storage: InMemoryCredentialStore) -> SessionStore {
        SessionStore::new(Box::new(storage)).unwrap()
    }

    fn admin_bruker_json() -> String {
        r#"{"id":"b1","email":"admin@strix.no","navn":"Sara Administrator","roller":[{"id":"ADMINISTRATOR","navn":"ADMINISTRATOR"}]}"#
            .to_string()
    }

    #[test]
    fn starts_anonymous_at_baseline() {
        let store = store_with(InMemoryCredentialStore::new());
        assert_eq!(store.selected_role(), Role::Soker);
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
    }

    #[test]
    fn set_selected_role_is_unconditional_and_idempotent() {
        let mut store = store_with(InMemoryCredentialStore::new());

        store.set_selected_role(Role::Opptaksleder);
        assert!(store.has_permission("MANAGE_OPPTAK"));

        // Second application changes nothing observable.
        store.set_selected_role(Role::Opptaksleder);
        assert_eq!(store.selected_role(), Role::Opptaksleder);
        assert!(store.has_permission("MANAGE_OPPTAK"));
        assert!(!store.has_permission("CREATE_ORGANISATION"));
    }

    #[test]
    fn permission_checks_reflect_role_change_immediately() {
        let mut store = store_with(InMemoryCredentialStore::new());
        assert!(!store.has_permission("ADMIN_ORGANISATIONS"));

        store.set_selected_role(Role::Administrator);
        assert!(store.has_permission("ADMIN_ORGANISATIONS"));

        store.set_selected_role(Role::Soker);
        assert!(!store.has_permission("ADMIN_ORGANISATIONS"));
    }

    #[test]
    fn unknown_permission_is_denied_regardless_of_role() {
        let mut store = store_with(InMemoryCredentialStore::new());
        store.set_selected_role(Role::Administrator);
        assert!(!store.has_permission("UNKNOWN_PERMISSION"));
    }

    #[test]
    fn restore_with_empty_storage_stays_anonymous() {
        let mut store = store_with(InMemoryCredentialStore::new());
        store.restore();

        assert_eq!(store.selected_role(), Role::Soker);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn restore_with_malformed_identity_stays_anonymous() {
        let storage = InMemoryCredentialStore::new();
        storage.seed(StoredCredentials {
            token: "jwt-123".to_string(),
            bruker_json: "{not valid json".to_string(),
        });

        let mut store = store_with(storage);
        store.restore();

        assert_eq!(store.selected_role(), Role::Soker);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn restore_reinstates_session_and_role() {
        let storage = InMemoryCredentialStore::new();
        storage.seed(StoredCredentials {
            token: "jwt-123".to_string(),
            bruker_json: admin_bruker_json(),
        });

        let mut store = store_with(storage);
        store.restore();

        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("jwt-123"));
        assert_eq!(store.selected_role(), Role::Administrator);
    }

    #[test]
    fn logout_clears_session_storage_and_role() {
        let storage = InMemoryCredentialStore::new();
        storage.seed(StoredCredentials {
            token: "jwt-123".to_string(),
            bruker_json: admin_bruker_json(),
        });
        let observer = storage.clone();

        let mut store = store_with(storage);
        store.restore();
        assert!(store.is_authenticated());

        store.logout();

        assert!(!store.is_authenticated());
        assert_eq!(store.selected_role(), Role::Soker);
        assert!(observer.snapshot().is_none());
    }

    #[test]
    fn teardown_keeps_durable_storage() {
        let storage = InMemoryCredentialStore::new();
        storage.seed(StoredCredentials {
            token: "jwt-123".to_string(),
            bruker_json: admin_bruker_json(),
        });
        let observer = storage.clone();

        let mut store = store_with(storage);
        store.restore();
        store.teardown();

        assert!(!store.is_authenticated());
        assert!(observer.snapshot().is_some());
    }
}
