//! `strix-auth` — pure role/permission boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: every
//! permission decision is answerable from the fixed access matrix alone,
//! without consulting any remote source.

pub mod bruker;
pub mod permissions;
pub mod roles;
pub mod tilgang;

pub use bruker::{Bruker, BrukerRolle, OrganisasjonRef};
pub use permissions::Permission;
pub use roles::{map_backend_role, Role};
pub use tilgang::{granted, has_permission, permissions_for, verify_access_matrix};
