//! Operation documents and typed request helpers for organisations.
//!
//! Views never build requests themselves; wire-format changes land here.

use serde::Deserialize;
use serde_json::json;

use strix_core::OrganisasjonId;
use strix_gateway::{Gateway, GatewayError, OperationError};

use crate::organisasjon::{OppdaterOrganisasjonInput, OpprettOrganisasjonInput, Organisasjon};

pub const ORGANISASJONER_QUERY: &str = r#"
query GetOrganisasjoner {
  organisasjoner {
    id
    navn
    kortNavn
    type
    organisasjonsnummer
    epost
    telefon
    adresse
    poststed
    postnummer
    nettside
    aktiv
  }
}
"#;

pub const ORGANISASJON_QUERY: &str = r#"
query GetOrganisasjon($id: ID!) {
  organisasjon(id: $id) {
    id
    navn
    kortNavn
    type
    organisasjonsnummer
    epost
    telefon
    adresse
    poststed
    postnummer
    nettside
    aktiv
  }
}
"#;

pub const OPPRETT_ORGANISASJON_MUTATION: &str = r#"
mutation OpprettOrganisasjon($input: OpprettOrganisasjonInput!) {
  opprettOrganisasjon(input: $input) {
    id
    navn
    kortNavn
    type
    organisasjonsnummer
    epost
    telefon
    adresse
    poststed
    postnummer
    nettside
    aktiv
  }
}
"#;

pub const OPPDATER_ORGANISASJON_MUTATION: &str = r#"
mutation OppdaterOrganisasjon($input: OppdaterOrganisasjonInput!) {
  oppdaterOrganisasjon(input: $input) {
    id
    navn
    kortNavn
    type
    organisasjonsnummer
    epost
    telefon
    adresse
    poststed
    postnummer
    nettside
    aktiv
  }
}
"#;

pub const DEAKTIVER_ORGANISASJON_MUTATION: &str = r#"
mutation DeaktiverOrganisasjon($id: ID!) {
  deaktiverOrganisasjon(id: $id) {
    id
    aktiv
  }
}
"#;

pub const REAKTIVER_ORGANISASJON_MUTATION: &str = r#"
mutation ReaktiverOrganisasjon($id: ID!) {
  reaktiverOrganisasjon(id: $id) {
    id
    aktiv
  }
}
"#;

/// `{id, aktiv}` echo from the soft-delete mutations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AktivStatus {
    pub id: OrganisasjonId,
    pub aktiv: bool,
}

/// All organisations, in server order.
pub async fn hent_organisasjoner(
    gateway: &Gateway,
    credential: Option<&str>,
) -> Result<Vec<Organisasjon>, GatewayError> {
    #[derive(Deserialize)]
    struct Data {
        organisasjoner: Vec<Organisasjon>,
    }

    let data: Data = gateway
        .request(ORGANISASJONER_QUERY, json!({}), credential)
        .await?;
    Ok(data.organisasjoner)
}

/// One organisation by ID; `None` when the server reports no match.
pub async fn hent_organisasjon(
    gateway: &Gateway,
    id: &OrganisasjonId,
    credential: Option<&str>,
) -> Result<Option<Organisasjon>, GatewayError> {
    #[derive(Deserialize)]
    struct Data {
        organisasjon: Option<Organisasjon>,
    }

    let data: Data = gateway
        .request(ORGANISASJON_QUERY, json!({"id": id}), credential)
        .await?;
    Ok(data.organisasjon)
}

pub async fn opprett_organisasjon(
    gateway: &Gateway,
    input: &OpprettOrganisasjonInput,
    credential: Option<&str>,
) -> Result<Organisasjon, OperationError> {
    input.validate()?;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Data {
        opprett_organisasjon: Organisasjon,
    }

    let data: Data = gateway
        .request(
            OPPRETT_ORGANISASJON_MUTATION,
            json!({"input": input}),
            credential,
        )
        .await?;
    Ok(data.opprett_organisasjon)
}

pub async fn oppdater_organisasjon(
    gateway: &Gateway,
    input: &OppdaterOrganisasjonInput,
    credential: Option<&str>,
) -> Result<Organisasjon, OperationError> {
    input.validate()?;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Data {
        oppdater_organisasjon: Organisasjon,
    }

    let data: Data = gateway
        .request(
            OPPDATER_ORGANISASJON_MUTATION,
            json!({"input": input}),
            credential,
        )
        .await?;
    Ok(data.oppdater_organisasjon)
}

/// Soft-delete: the organisation stays listed, flagged inactive.
pub async fn deaktiver_organisasjon(
    gateway: &Gateway,
    id: &OrganisasjonId,
    credential: Option<&str>,
) -> Result<AktivStatus, GatewayError> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Data {
        deaktiver_organisasjon: AktivStatus,
    }

    let data: Data = gateway
        .request(
            DEAKTIVER_ORGANISASJON_MUTATION,
            json!({"id": id}),
            credential,
        )
        .await?;
    Ok(data.deaktiver_organisasjon)
}

pub async fn reaktiver_organisasjon(
    gateway: &Gateway,
    id: &OrganisasjonId,
    credential: Option<&str>,
) -> Result<AktivStatus, GatewayError> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Data {
        reaktiver_organisasjon: AktivStatus,
    }

    let data: Data = gateway
        .request(
            REAKTIVER_ORGANISASJON_MUTATION,
            json!({"id": id}),
            credential,
        )
        .await?;
    Ok(data.reaktiver_organisasjon)
}
