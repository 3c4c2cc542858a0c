//! Strongly-typed identifiers used across the client.
//!
//! The backend mints short string slugs (e.g. `"ntnu"`, `"uio"`), so IDs are
//! opaque strings here. The newtypes exist so a `UtdanningId` cannot be
//! passed where an `OpptakId` is expected.

use serde::{Deserialize, Serialize};

macro_rules! impl_string_id {
    ($t:ident) => {
        /// Opaque server-assigned identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_string_id!(OrganisasjonId);
impl_string_id!(UtdanningId);
impl_string_id!(OpptakId);
impl_string_id!(BrukerId);
impl_string_id!(RolleId);
