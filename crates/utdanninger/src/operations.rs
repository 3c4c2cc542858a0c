//! Operation documents and typed request helpers for programmes.

use serde::Deserialize;
use serde_json::json;

use strix_core::UtdanningId;
use strix_gateway::{Gateway, GatewayError, OperationError};

use crate::utdanning::{
    OppdaterUtdanningInput, OpprettUtdanningInput, PageInput, Utdanning, UtdanningFilter,
    UtdanningPage,
};

pub const UTDANNINGER_QUERY: &str = r#"
query GetUtdanninger($filter: UtdanningFilter, $page: PageInput) {
  utdanninger(filter: $filter, page: $page) {
    content {
      id
      navn
      studienivaa
      studiepoeng
      varighet
      studiested
      undervisningssprak
      starttidspunkt
      studieform
      aktiv
      organisasjon {
        id
        navn
        kortNavn
      }
    }
    totalElements
    totalPages
    currentPage
    pageSize
    hasNext
    hasPrevious
  }
}
"#;

pub const OPPRETT_UTDANNING_MUTATION: &str = r#"
mutation OpprettUtdanning($input: OpprettUtdanningInput!) {
  opprettUtdanning(input: $input) {
    id
    navn
    studienivaa
    studiepoeng
    varighet
    studiested
    undervisningssprak
    starttidspunkt
    studieform
    aktiv
    organisasjon {
      id
      navn
      kortNavn
    }
  }
}
"#;

pub const OPPDATER_UTDANNING_MUTATION: &str = r#"
mutation OppdaterUtdanning($input: OppdaterUtdanningInput!) {
  oppdaterUtdanning(input: $input) {
    id
    navn
    studienivaa
    studiepoeng
    varighet
    studiested
    undervisningssprak
    starttidspunkt
    studieform
    aktiv
    organisasjon {
      id
      navn
      kortNavn
    }
  }
}
"#;

pub const DEAKTIVER_UTDANNING_MUTATION: &str = r#"
mutation DeaktiverUtdanning($id: ID!) {
  deaktiverUtdanning(id: $id) {
    id
    aktiv
  }
}
"#;

pub const AKTIVER_UTDANNING_MUTATION: &str = r#"
mutation AktiverUtdanning($id: ID!) {
  aktiverUtdanning(id: $id) {
    id
    aktiv
  }
}
"#;

pub const SLETT_UTDANNING_MUTATION: &str = r#"
mutation SlettUtdanning($id: ID!) {
  slettUtdanning(id: $id)
}
"#;

/// One page of programmes matching the filter.
pub async fn hent_utdanninger(
    gateway: &Gateway,
    filter: &UtdanningFilter,
    page: PageInput,
    credential: Option<&str>,
) -> Result<UtdanningPage, GatewayError> {
    #[derive(Deserialize)]
    struct Data {
        utdanninger: UtdanningPage,
    }

    let data: Data = gateway
        .request(
            UTDANNINGER_QUERY,
            json!({"filter": filter, "page": page}),
            credential,
        )
        .await?;
    Ok(data.utdanninger)
}

pub async fn opprett_utdanning(
    gateway: &Gateway,
    input: &OpprettUtdanningInput,
    credential: Option<&str>,
) -> Result<Utdanning, OperationError> {
    input.validate()?;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Data {
        opprett_utdanning: Utdanning,
    }

    let data: Data = gateway
        .request(
            OPPRETT_UTDANNING_MUTATION,
            json!({"input": input}),
            credential,
        )
        .await?;
    Ok(data.opprett_utdanning)
}

pub async fn oppdater_utdanning(
    gateway: &Gateway,
    input: &OppdaterUtdanningInput,
    credential: Option<&str>,
) -> Result<Utdanning, OperationError> {
    input.validate()?;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Data {
        oppdater_utdanning: Utdanning,
    }

    let data: Data = gateway
        .request(
            OPPDATER_UTDANNING_MUTATION,
            json!({"input": input}),
            credential,
        )
        .await?;
    Ok(data.oppdater_utdanning)
}

/// `{id, aktiv}` echo from the activation toggles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UtdanningAktivStatus {
    pub id: UtdanningId,
    pub aktiv: bool,
}

pub async fn deaktiver_utdanning(
    gateway: &Gateway,
    id: &UtdanningId,
    credential: Option<&str>,
) -> Result<UtdanningAktivStatus, GatewayError> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Data {
        deaktiver_utdanning: UtdanningAktivStatus,
    }

    let data: Data = gateway
        .request(DEAKTIVER_UTDANNING_MUTATION, json!({"id": id}), credential)
        .await?;
    Ok(data.deaktiver_utdanning)
}

pub async fn aktiver_utdanning(
    gateway: &Gateway,
    id: &UtdanningId,
    credential: Option<&str>,
) -> Result<UtdanningAktivStatus, GatewayError> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Data {
        aktiver_utdanning: UtdanningAktivStatus,
    }

    let data: Data = gateway
        .request(AKTIVER_UTDANNING_MUTATION, json!({"id": id}), credential)
        .await?;
    Ok(data.aktiver_utdanning)
}

/// Hard delete; `true` when the server removed the programme.
pub async fn slett_utdanning(
    gateway: &Gateway,
    id: &UtdanningId,
    credential: Option<&str>,
) -> Result<bool, GatewayError> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Data {
        slett_utdanning: bool,
    }

    let data: Data = gateway
        .request(SLETT_UTDANNING_MUTATION, json!({"id": id}), credential)
        .await?;
    Ok(data.slett_utdanning)
}
