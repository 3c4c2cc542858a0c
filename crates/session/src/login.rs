//! The login exchange: operation document, payload shapes, demo users.

use serde::{Deserialize, Serialize};

use strix_auth::{Bruker, Role};

/// Login mutation sent through the gateway.
pub const LOGIN_MUTATION: &str = r#"
mutation Login($input: LoginInput!) {
  login(input: $input) {
    token
    bruker {
      id
      email
      navn
      roller {
        id
        navn
      }
      organisasjon {
        id
        navn
      }
    }
  }
}
"#;

/// Shared dev password for the demo users. The whole login flow is a
/// test-only stub; production authentication is out of scope.
pub const TEST_PASSWORD: &str = "test123";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput<'a> {
    pub email: &'a str,
    pub passord: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub login: LoginResult,
}

/// `{token, bruker}` as returned by the login mutation.
#[derive(Debug, Deserialize)]
pub struct LoginResult {
    pub token: String,
    pub bruker: Bruker,
}

/// A demo account, one per role.
#[derive(Debug, Clone, Copy)]
pub struct TestBruker {
    pub email: &'static str,
    pub navn: &'static str,
    pub rolle: Role,
}

/// The fixed demo-user catalogue the login form offers.
pub const TEST_BRUKERE: [TestBruker; 4] = [
    TestBruker {
        email: "admin@strix.no",
        navn: "Sara Administrator",
        rolle: Role::Administrator,
    },
    TestBruker {
        email: "opptaksleder@ntnu.no",
        navn: "Kari Opptaksleder",
        rolle: Role::Opptaksleder,
    },
    TestBruker {
        email: "behandler@uio.no",
        navn: "Per Behandler",
        rolle: Role::Soknadsbehandler,
    },
    TestBruker {
        email: "soker@student.no",
        navn: "Astrid Søker",
        rolle: Role::Soker,
    },
];
