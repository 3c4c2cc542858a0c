//! Operation documents and typed request helpers for admission rounds.

use serde::Deserialize;
use serde_json::json;

use strix_core::{OpptakId, OrganisasjonId};
use strix_gateway::{Gateway, GatewayError, OperationError};

use crate::opptak::{
    EndreOpptaksStatusInput, OppdaterOpptakInput, OpprettOpptakInput, Opptak, OpptaksStatus,
};

pub const ALLE_OPPTAK_QUERY: &str = r#"
query GetAlleOpptak {
  alleOpptak {
    id
    navn
    type
    aar
    soknadsfrist
    svarfrist
    maxUtdanningerPerSoknad
    status
    opptaksomgang
    beskrivelse
    aktiv
    samordnet
    administrator {
      id
      navn
      kortNavn
    }
  }
}
"#;

pub const OPPTAK_QUERY: &str = r#"
query GetOpptak($id: ID!) {
  opptak(id: $id) {
    id
    navn
    type
    aar
    soknadsfrist
    svarfrist
    maxUtdanningerPerSoknad
    status
    opptaksomgang
    beskrivelse
    aktiv
    samordnet
    administrator {
      id
      navn
      kortNavn
    }
    utdanninger {
      id
      utdanningId
      opptakId
      antallPlasser
      aktivt
      utdanning {
        id
        navn
        studienivaa
      }
    }
  }
}
"#;

pub const OPPRETT_OPPTAK_MUTATION: &str = r#"
mutation OpprettOpptak($input: OpprettOpptakInput!) {
  opprettOpptak(input: $input) {
    id
    navn
    type
    aar
    soknadsfrist
    svarfrist
    maxUtdanningerPerSoknad
    status
    opptaksomgang
    beskrivelse
    aktiv
    samordnet
  }
}
"#;

pub const OPPDATER_OPPTAK_MUTATION: &str = r#"
mutation OppdaterOpptak($input: OppdaterOpptakInput!) {
  oppdaterOpptak(input: $input) {
    id
    navn
    type
    aar
    soknadsfrist
    svarfrist
    maxUtdanningerPerSoknad
    status
    opptaksomgang
    beskrivelse
    aktiv
    samordnet
  }
}
"#;

pub const ENDRE_OPPTAK_STATUS_MUTATION: &str = r#"
mutation EndreOpptakStatus($input: EndreOpptaksStatusInput!) {
  endreOpptakStatus(input: $input) {
    id
    status
  }
}
"#;

pub const DEAKTIVER_OPPTAK_MUTATION: &str = r#"
mutation DeaktiverOpptak($opptakId: ID!) {
  deaktiverOpptak(opptakId: $opptakId) {
    id
    aktiv
  }
}
"#;

pub const REAKTIVER_OPPTAK_MUTATION: &str = r#"
mutation ReaktiverOpptak($opptakId: ID!) {
  reaktiverOpptak(opptakId: $opptakId) {
    id
    aktiv
  }
}
"#;

pub const GI_TILGANG_MUTATION: &str = r#"
mutation GiOrganisasjonOpptakTilgang($opptakId: ID!, $organisasjonId: ID!) {
  giOrganisasjonOpptakTilgang(opptakId: $opptakId, organisasjonId: $organisasjonId) {
    id
    navn
  }
}
"#;

pub const FJERN_TILGANG_MUTATION: &str = r#"
mutation FjernOrganisasjonOpptakTilgang($opptakId: ID!, $organisasjonId: ID!) {
  fjernOrganisasjonOpptakTilgang(opptakId: $opptakId, organisasjonId: $organisasjonId) {
    id
    navn
  }
}
"#;

/// `{id, status}` echo from the status mutation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OpptakStatusEcho {
    pub id: OpptakId,
    pub status: OpptaksStatus,
}

/// `{id, aktiv}` echo from the soft-delete mutations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OpptakAktivEcho {
    pub id: OpptakId,
    pub aktiv: bool,
}

/// Slim `{id, navn}` echo from the access-grant mutations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OpptakRef {
    pub id: OpptakId,
    pub navn: String,
}

/// All admission rounds, in server order.
pub async fn hent_alle_opptak(
    gateway: &Gateway,
    credential: Option<&str>,
) -> Result<Vec<Opptak>, GatewayError> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Data {
        alle_opptak: Vec<Opptak>,
    }

    let data: Data = gateway
        .request(ALLE_OPPTAK_QUERY, json!({}), credential)
        .await?;
    Ok(data.alle_opptak)
}

/// One round by ID with its programme offerings; `None` when unknown.
pub async fn hent_opptak(
    gateway: &Gateway,
    id: &OpptakId,
    credential: Option<&str>,
) -> Result<Option<Opptak>, GatewayError> {
    #[derive(Deserialize)]
    struct Data {
        opptak: Option<Opptak>,
    }

    let data: Data = gateway
        .request(OPPTAK_QUERY, json!({"id": id}), credential)
        .await?;
    Ok(data.opptak)
}

pub async fn opprett_opptak(
    gateway: &Gateway,
    input: &OpprettOpptakInput,
    credential: Option<&str>,
) -> Result<Opptak, OperationError> {
    input.validate()?;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Data {
        opprett_opptak: Opptak,
    }

    let data: Data = gateway
        .request(OPPRETT_OPPTAK_MUTATION, json!({"input": input}), credential)
        .await?;
    Ok(data.opprett_opptak)
}

pub async fn oppdater_opptak(
    gateway: &Gateway,
    input: &OppdaterOpptakInput,
    credential: Option<&str>,
) -> Result<Opptak, OperationError> {
    input.validate()?;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Data {
        oppdater_opptak: Opptak,
    }

    let data: Data = gateway
        .request(OPPDATER_OPPTAK_MUTATION, json!({"input": input}), credential)
        .await?;
    Ok(data.oppdater_opptak)
}

/// Change the round's status after checking the transition locally.
///
/// The current status must come from the round the view is showing; an
/// illegal transition is rejected before anything reaches the wire.
pub async fn endre_opptak_status(
    gateway: &Gateway,
    gjeldende: OpptaksStatus,
    input: &EndreOpptaksStatusInput,
    credential: Option<&str>,
) -> Result<OpptakStatusEcho, OperationError> {
    if !gjeldende.kan_endres_til(input.ny_status) {
        return Err(strix_core::DomainError::invariant(format!(
            "kan ikke endre status fra {} til {}",
            gjeldende.label(),
            input.ny_status.label()
        ))
        .into());
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Data {
        endre_opptak_status: OpptakStatusEcho,
    }

    let data: Data = gateway
        .request(
            ENDRE_OPPTAK_STATUS_MUTATION,
            json!({"input": input}),
            credential,
        )
        .await?;
    Ok(data.endre_opptak_status)
}

pub async fn deaktiver_opptak(
    gateway: &Gateway,
    opptak_id: &OpptakId,
    credential: Option<&str>,
) -> Result<OpptakAktivEcho, GatewayError> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Data {
        deaktiver_opptak: OpptakAktivEcho,
    }

    let data: Data = gateway
        .request(
            DEAKTIVER_OPPTAK_MUTATION,
            json!({"opptakId": opptak_id}),
            credential,
        )
        .await?;
    Ok(data.deaktiver_opptak)
}

pub async fn reaktiver_opptak(
    gateway: &Gateway,
    opptak_id: &OpptakId,
    credential: Option<&str>,
) -> Result<OpptakAktivEcho, GatewayError> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Data {
        reaktiver_opptak: OpptakAktivEcho,
    }

    let data: Data = gateway
        .request(
            REAKTIVER_OPPTAK_MUTATION,
            json!({"opptakId": opptak_id}),
            credential,
        )
        .await?;
    Ok(data.reaktiver_opptak)
}

/// Grant an organisation access to a coordinated round.
pub async fn gi_organisasjon_opptak_tilgang(
    gateway: &Gateway,
    opptak_id: &OpptakId,
    organisasjon_id: &OrganisasjonId,
    credential: Option<&str>,
) -> Result<OpptakRef, GatewayError> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Data {
        gi_organisasjon_opptak_tilgang: OpptakRef,
    }

    let data: Data = gateway
        .request(
            GI_TILGANG_MUTATION,
            json!({"opptakId": opptak_id, "organisasjonId": organisasjon_id}),
            credential,
        )
        .await?;
    Ok(data.gi_organisasjon_opptak_tilgang)
}

pub async fn fjern_organisasjon_opptak_tilgang(
    gateway: &Gateway,
    opptak_id: &OpptakId,
    organisasjon_id: &OrganisasjonId,
    credential: Option<&str>,
) -> Result<OpptakRef, GatewayError> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Data {
        fjern_organisasjon_opptak_tilgang: OpptakRef,
    }

    let data: Data = gateway
        .request(
            FJERN_TILGANG_MUTATION,
            json!({"opptakId": opptak_id, "organisasjonId": organisasjon_id}),
            credential,
        )
        .await?;
    Ok(data.fjern_organisasjon_opptak_tilgang)
}
