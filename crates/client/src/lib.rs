//! `strix-client` — composition of the session store and the gateway behind
//! one injectable handle, plus endpoint configuration and the staleness
//! guard for superseded in-flight requests.

pub mod client;
pub mod config;
pub mod stale;

pub use client::StrixClient;
pub use config::{StrixConfig, DEFAULT_GRAPHQL_URL};
pub use stale::{RequestTicket, StaleGuard};
