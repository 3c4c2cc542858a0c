use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use strix_core::{DomainError, DomainResult, OpptakId, OrganisasjonId, UtdanningId};
use strix_organisasjoner::OrganisasjonSammendrag;
use strix_utdanninger::UtdanningSammendrag;

/// Kind of admission round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpptaksType {
    /// Nationally coordinated university/college round.
    Uhg,
    /// Nationally coordinated vocational-school round.
    Fsu,
    /// Round run locally by one organisation.
    Lokalt,
}

/// Lifecycle status of an admission round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpptaksStatus {
    /// Not yet opened for applications.
    Fremtidig,
    /// Accepting applications.
    Apent,
    /// Closed for applications.
    Stengt,
    /// Fully processed.
    Avsluttet,
}

impl OpptaksStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OpptaksStatus::Fremtidig => "Fremtidig",
            OpptaksStatus::Apent => "Åpent",
            OpptaksStatus::Stengt => "Stengt",
            OpptaksStatus::Avsluttet => "Avsluttet",
        }
    }

    /// Legal status transitions: forward through the lifecycle, plus
    /// reopening a closed round. A finished round stays finished.
    pub fn kan_endres_til(&self, ny: OpptaksStatus) -> bool {
        matches!(
            (self, ny),
            (OpptaksStatus::Fremtidig, OpptaksStatus::Apent)
                | (OpptaksStatus::Apent, OpptaksStatus::Stengt)
                | (OpptaksStatus::Stengt, OpptaksStatus::Apent)
                | (OpptaksStatus::Stengt, OpptaksStatus::Avsluttet)
        )
    }
}

/// A programme offered within an admission round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtdanningIOpptak {
    pub id: String,
    pub utdanning_id: UtdanningId,
    pub opptak_id: OpptakId,
    #[serde(default)]
    pub antall_plasser: Option<i32>,
    pub aktivt: bool,
    #[serde(default)]
    pub opprettet: Option<NaiveDateTime>,
    #[serde(default)]
    pub utdanning: Option<UtdanningSammendrag>,
}

/// An admission round as the backend reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opptak {
    pub id: OpptakId,
    pub navn: String,
    #[serde(rename = "type")]
    pub opptakstype: OpptaksType,
    pub aar: i32,
    #[serde(default)]
    pub soknadsfrist: Option<NaiveDate>,
    #[serde(default)]
    pub svarfrist: Option<NaiveDate>,
    #[serde(default)]
    pub max_utdanninger_per_soknad: Option<i32>,
    pub status: OpptaksStatus,
    #[serde(default)]
    pub opptaksomgang: Option<String>,
    #[serde(default)]
    pub beskrivelse: Option<String>,
    #[serde(default)]
    pub opprettet: Option<NaiveDateTime>,
    pub aktiv: bool,
    pub samordnet: bool,
    #[serde(default)]
    pub administrator_organisasjon_id: Option<OrganisasjonId>,
    #[serde(default)]
    pub administrator: Option<OrganisasjonSammendrag>,
    #[serde(default)]
    pub utdanninger: Option<Vec<UtdanningIOpptak>>,
}

impl Opptak {
    /// Whether the round currently accepts applications.
    pub fn er_apent(&self) -> bool {
        self.aktiv && self.status == OpptaksStatus::Apent
    }
}

/// Input for `opprettOpptak`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpprettOpptakInput {
    pub navn: String,
    #[serde(rename = "type")]
    pub opptakstype: OpptaksType,
    pub aar: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soknadsfrist: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svarfrist: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_utdanninger_per_soknad: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opptaksomgang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beskrivelse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samordnet: Option<bool>,
    pub administrator_organisasjon_id: OrganisasjonId,
}

impl OpprettOpptakInput {
    pub fn validate(&self) -> DomainResult<()> {
        if self.navn.trim().is_empty() {
            return Err(DomainError::validation("navn er påkrevd"));
        }
        if !(2000..=2100).contains(&self.aar) {
            return Err(DomainError::validation("aar må være et gyldig årstall"));
        }
        if matches!(self.max_utdanninger_per_soknad, Some(max) if max <= 0) {
            return Err(DomainError::validation(
                "maxUtdanningerPerSoknad må være positivt",
            ));
        }
        if let (Some(soknadsfrist), Some(svarfrist)) = (self.soknadsfrist, self.svarfrist) {
            if svarfrist < soknadsfrist {
                return Err(DomainError::validation(
                    "svarfrist kan ikke være før søknadsfrist",
                ));
            }
        }
        Ok(())
    }
}

/// Input for `oppdaterOpptak`; absent fields keep their value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OppdaterOpptakInput {
    pub id: OpptakId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navn: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub opptakstype: Option<OpptaksType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aar: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soknadsfrist: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svarfrist: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_utdanninger_per_soknad: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opptaksomgang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beskrivelse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samordnet: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrator_organisasjon_id: Option<OrganisasjonId>,
}

impl OppdaterOpptakInput {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(navn) = &self.navn {
            if navn.trim().is_empty() {
                return Err(DomainError::validation("navn kan ikke være tomt"));
            }
        }
        if matches!(self.aar, Some(aar) if !(2000..=2100).contains(&aar)) {
            return Err(DomainError::validation("aar må være et gyldig årstall"));
        }
        if matches!(self.max_utdanninger_per_soknad, Some(max) if max <= 0) {
            return Err(DomainError::validation(
                "maxUtdanningerPerSoknad må være positivt",
            ));
        }
        Ok(())
    }
}

/// Input for `endreOpptakStatus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndreOpptaksStatusInput {
    pub opptak_id: OpptakId,
    pub ny_status: OpptaksStatus,
}

impl EndreOpptaksStatusInput {
    pub fn new(opptak_id: OpptakId, ny_status: OpptaksStatus) -> Self {
        Self { opptak_id, ny_status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lifecycle_moves_forward() {
        assert!(OpptaksStatus::Fremtidig.kan_endres_til(OpptaksStatus::Apent));
        assert!(OpptaksStatus::Apent.kan_endres_til(OpptaksStatus::Stengt));
        assert!(OpptaksStatus::Stengt.kan_endres_til(OpptaksStatus::Avsluttet));
    }

    #[test]
    fn closed_round_can_reopen() {
        assert!(OpptaksStatus::Stengt.kan_endres_til(OpptaksStatus::Apent));
    }

    #[test]
    fn illegal_transitions_are_rejected() {
        assert!(!OpptaksStatus::Fremtidig.kan_endres_til(OpptaksStatus::Avsluttet));
        assert!(!OpptaksStatus::Apent.kan_endres_til(OpptaksStatus::Fremtidig));
        assert!(!OpptaksStatus::Avsluttet.kan_endres_til(OpptaksStatus::Apent));
        assert!(!OpptaksStatus::Apent.kan_endres_til(OpptaksStatus::Apent));
    }

    #[test]
    fn er_apent_requires_active_and_open() {
        let json = r#"{
            "id": "uhg-host-2025",
            "navn": "Nasjonalt samordnet opptak UHG Høst 2025",
            "type": "UHG",
            "aar": 2025,
            "soknadsfrist": "2025-04-15",
            "svarfrist": "2025-07-20",
            "maxUtdanningerPerSoknad": 10,
            "status": "APENT",
            "aktiv": true,
            "samordnet": true
        }"#;

        let mut opptak: Opptak = serde_json::from_str(json).unwrap();
        assert!(opptak.er_apent());
        assert_eq!(opptak.opptakstype, OpptaksType::Uhg);

        opptak.aktiv = false;
        assert!(!opptak.er_apent());
    }

    #[test]
    fn opprett_input_validates_year_and_deadlines() {
        let mut input = OpprettOpptakInput {
            navn: "Lokalt opptak NTNU".to_string(),
            opptakstype: OpptaksType::Lokalt,
            aar: 2026,
            soknadsfrist: NaiveDate::from_ymd_opt(2026, 4, 15),
            svarfrist: NaiveDate::from_ymd_opt(2026, 7, 20),
            max_utdanninger_per_soknad: Some(10),
            opptaksomgang: None,
            beskrivelse: None,
            samordnet: Some(false),
            administrator_organisasjon_id: OrganisasjonId::new("ntnu"),
        };
        assert!(input.validate().is_ok());

        input.aar = 1995;
        assert!(input.validate().is_err());

        input.aar = 2026;
        input.svarfrist = NaiveDate::from_ymd_opt(2026, 3, 1);
        assert!(input.validate().is_err());
    }

    #[test]
    fn deserializes_round_with_programmes() {
        let json = r#"{
            "id": "uhg-host-2025",
            "navn": "Nasjonalt samordnet opptak UHG Høst 2025",
            "type": "UHG",
            "aar": 2025,
            "status": "STENGT",
            "aktiv": true,
            "samordnet": true,
            "administrator": {"id": "sikt", "navn": "Sikt", "kortNavn": null},
            "utdanninger": [{
                "id": "uio-informatikk-uhg-host-2025",
                "utdanningId": "uio-informatikk",
                "opptakId": "uhg-host-2025",
                "antallPlasser": 120,
                "aktivt": true,
                "utdanning": {"id": "uio-informatikk", "navn": "Informatikk", "studienivaa": "Bachelor"}
            }]
        }"#;

        let opptak: Opptak = serde_json::from_str(json).unwrap();
        let tilbud = opptak.utdanninger.as_ref().unwrap();
        assert_eq!(tilbud.len(), 1);
        assert_eq!(tilbud[0].antall_plasser, Some(120));
        assert_eq!(
            tilbud[0].utdanning.as_ref().unwrap().navn,
            "Informatikk"
        );
    }
}
