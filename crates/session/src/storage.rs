//! Durable local storage for the credential and identity.
//!
//! Two string-keyed entries under fixed keys, written atomically as one JSON
//! document: the bearer token, and the identity serialized as a JSON string
//! (mirroring what the server sent). Each write fully replaces prior content.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const KEY_AUTH_TOKEN: &str = "authToken";
pub const KEY_AUTH_USER: &str = "authUser";

/// The pair of entries a session leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredentials {
    pub token: String,
    /// Identity as the JSON string it arrived as; parsed on restore.
    pub bruker_json: String,
}

/// Persistent key-value storage for the session.
///
/// `load` returning `None` covers both "nothing stored" and "stored content
/// unusable" — restoring must never fail hard on bad local state.
pub trait CredentialStore: std::fmt::Debug + Send {
    fn load(&self) -> Option<StoredCredentials>;
    fn save(&self, credentials: &StoredCredentials) -> anyhow::Result<()>;
    fn clear(&self);
}

#[derive(Debug, Serialize, Deserialize)]
struct FileEntries {
    #[serde(rename = "authToken")]
    token: Option<String>,
    #[serde(rename = "authUser")]
    user: Option<String>,
}

/// File-backed store under the per-user data directory.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store at the default location (`<data dir>/strix/session.json`).
    pub fn new() -> anyhow::Result<Self> {
        let base = dirs::data_dir().context("no user data directory available")?;
        Ok(Self {
            path: base.join("strix").join("session.json"),
        })
    }

    /// Store at an explicit path (tests, portable installs).
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Option<StoredCredentials> {
        let raw = std::fs::read_to_string(&self.path).ok()?;

        let entries: FileEntries = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "stored session is not valid JSON, treating as absent");
                return None;
            }
        };

        match (entries.token, entries.user) {
            (Some(token), Some(bruker_json)) => Some(StoredCredentials { token, bruker_json }),
            _ => None,
        }
    }

    fn save(&self, credentials: &StoredCredentials) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create session directory at {:?}", parent))?;
        }

        let entries = FileEntries {
            token: Some(credentials.token.clone()),
            user: Some(credentials.bruker_json.clone()),
        };
        let body = serde_json::to_string_pretty(&entries)
            .context("failed to serialize session entries")?;

        std::fs::write(&self.path, body)
            .with_context(|| format!("failed to write session file at {:?}", self.path))
    }

    fn clear(&self) {
        // Best-effort: a missing file is already the state we want.
        let _ = std::fs::remove_file(&self.path);
    }
}

/// In-memory store for tests and ephemeral sessions.
///
/// Clones share the same entry, so a test can keep a handle and observe what
/// the session store persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    entry: Arc<Mutex<Option<StoredCredentials>>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stored entry, if any.
    pub fn snapshot(&self) -> Option<StoredCredentials> {
        self.entry.lock().expect("credential store lock poisoned").clone()
    }

    /// Seed the store with pre-existing entries (simulating a prior run).
    pub fn seed(&self, credentials: StoredCredentials) {
        *self.entry.lock().expect("credential store lock poisoned") = Some(credentials);
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn load(&self) -> Option<StoredCredentials> {
        self.snapshot()
    }

    fn save(&self, credentials: &StoredCredentials) -> anyhow::Result<()> {
        *self.entry.lock().expect("credential store lock poisoned") = Some(credentials.clone());
        Ok(())
    }

    fn clear(&self) {
        *self.entry.lock().expect("credential store lock poisoned") = None;
    }
}
