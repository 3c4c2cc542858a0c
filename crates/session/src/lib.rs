//! `strix-session` — single source of truth for "who is acting, and as what
//! role".
//!
//! The [`SessionStore`] is an explicit object with a defined lifecycle
//! (create, `restore`, `teardown`) that the view layer receives by injection;
//! nothing in this crate is ambient global state.

pub mod login;
pub mod storage;
pub mod store;

pub use login::{TestBruker, LOGIN_MUTATION, TEST_BRUKERE, TEST_PASSWORD};
pub use storage::{
    CredentialStore, FileCredentialStore, InMemoryCredentialStore, StoredCredentials,
    KEY_AUTH_TOKEN, KEY_AUTH_USER,
};
pub use store::{LoginError, Session, SessionStore};
