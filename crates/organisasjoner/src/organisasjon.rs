use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use strix_core::{DomainError, DomainResult, OrganisasjonId};

/// Kind of educational organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrganisasjonsType {
    Universitet,
    Hogskole,
    Fagskole,
    Privat,
}

impl OrganisasjonsType {
    /// Human-readable label for lists and badges.
    pub fn label(&self) -> &'static str {
        match self {
            OrganisasjonsType::Universitet => "Universitet",
            OrganisasjonsType::Hogskole => "Høgskole",
            OrganisasjonsType::Fagskole => "Fagskole",
            OrganisasjonsType::Privat => "Privat institusjon",
        }
    }
}

/// An educational organisation as the backend reports it.
///
/// Timestamps are backend-local wall-clock values (no offset on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organisasjon {
    pub id: OrganisasjonId,
    pub navn: String,
    #[serde(default)]
    pub kort_navn: Option<String>,
    #[serde(rename = "type")]
    pub organisasjonstype: OrganisasjonsType,
    #[serde(default)]
    pub organisasjonsnummer: Option<String>,
    #[serde(default)]
    pub epost: Option<String>,
    #[serde(default)]
    pub telefon: Option<String>,
    #[serde(default)]
    pub adresse: Option<String>,
    #[serde(default)]
    pub poststed: Option<String>,
    #[serde(default)]
    pub postnummer: Option<String>,
    #[serde(default)]
    pub nettside: Option<String>,
    #[serde(default)]
    pub opprettet: Option<NaiveDateTime>,
    #[serde(default)]
    pub oppdatert: Option<NaiveDateTime>,
    pub aktiv: bool,
}

/// Slim organisation reference for embedding in other entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganisasjonSammendrag {
    pub id: OrganisasjonId,
    pub navn: String,
    #[serde(default)]
    pub kort_navn: Option<String>,
}

/// Active organisations only, order preserved as received.
pub fn kun_aktive(organisasjoner: &[Organisasjon]) -> Vec<&Organisasjon> {
    organisasjoner.iter().filter(|o| o.aktiv).collect()
}

pub fn antall_aktive(organisasjoner: &[Organisasjon]) -> usize {
    organisasjoner.iter().filter(|o| o.aktiv).count()
}

fn valider_organisasjonsnummer(nummer: &str) -> DomainResult<()> {
    if nummer.len() != 9 || !nummer.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::validation(
            "organisasjonsnummer må være 9 siffer",
        ));
    }
    Ok(())
}

fn valider_epost(epost: &str) -> DomainResult<()> {
    if !epost.contains('@') {
        return Err(DomainError::validation("ugyldig epost-adresse"));
    }
    Ok(())
}

/// Input for `opprettOrganisasjon`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpprettOrganisasjonInput {
    pub navn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kort_navn: Option<String>,
    #[serde(rename = "type")]
    pub organisasjonstype: OrganisasjonsType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisasjonsnummer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poststed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postnummer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nettside: Option<String>,
}

impl OpprettOrganisasjonInput {
    /// Form-level validation; rejected input never reaches the gateway.
    pub fn validate(&self) -> DomainResult<()> {
        if self.navn.trim().is_empty() {
            return Err(DomainError::validation("navn er påkrevd"));
        }
        if let Some(nummer) = &self.organisasjonsnummer {
            valider_organisasjonsnummer(nummer)?;
        }
        if let Some(epost) = &self.epost {
            valider_epost(epost)?;
        }
        Ok(())
    }
}

/// Input for `oppdaterOrganisasjon`; absent fields keep their value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OppdaterOrganisasjonInput {
    pub id: OrganisasjonId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kort_navn: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub organisasjonstype: Option<OrganisasjonsType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisasjonsnummer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poststed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postnummer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nettside: Option<String>,
}

impl OppdaterOrganisasjonInput {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(navn) = &self.navn {
            if navn.trim().is_empty() {
                return Err(DomainError::validation("navn kan ikke være tomt"));
            }
        }
        if let Some(nummer) = &self.organisasjonsnummer {
            valider_organisasjonsnummer(nummer)?;
        }
        if let Some(epost) = &self.epost {
            valider_epost(epost)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(id: &str, aktiv: bool) -> Organisasjon {
        Organisasjon {
            id: OrganisasjonId::new(id),
            navn: id.to_uppercase(),
            kort_navn: None,
            organisasjonstype: OrganisasjonsType::Universitet,
            organisasjonsnummer: None,
            epost: None,
            telefon: None,
            adresse: None,
            poststed: None,
            postnummer: None,
            nettside: None,
            opprettet: None,
            oppdatert: None,
            aktiv,
        }
    }

    #[test]
    fn kun_aktive_filters_and_preserves_order() {
        let alle = vec![org("ntnu", true), org("gamle", false), org("uio", true)];

        let aktive = kun_aktive(&alle);
        assert_eq!(aktive.len(), 2);
        assert_eq!(aktive[0].id.as_str(), "ntnu");
        assert_eq!(aktive[1].id.as_str(), "uio");

        assert_eq!(antall_aktive(&alle), 2);
    }

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{
            "id": "ntnu",
            "navn": "Norges teknisk-naturvitenskapelige universitet",
            "kortNavn": "NTNU",
            "type": "UNIVERSITET",
            "organisasjonsnummer": "974767880",
            "epost": "post@ntnu.no",
            "telefon": "73595000",
            "adresse": "Høgskoleringen 1",
            "poststed": "Trondheim",
            "postnummer": "7491",
            "nettside": "https://www.ntnu.no",
            "opprettet": "2024-08-01T10:00:00",
            "aktiv": true
        }"#;

        let org: Organisasjon = serde_json::from_str(json).unwrap();
        assert_eq!(org.kort_navn.as_deref(), Some("NTNU"));
        assert_eq!(org.organisasjonstype, OrganisasjonsType::Universitet);
        assert!(org.opprettet.is_some());
        assert!(org.oppdatert.is_none());
    }

    #[test]
    fn opprett_input_requires_navn() {
        let input = OpprettOrganisasjonInput {
            navn: "   ".to_string(),
            kort_navn: None,
            organisasjonstype: OrganisasjonsType::Fagskole,
            organisasjonsnummer: None,
            epost: None,
            telefon: None,
            adresse: None,
            poststed: None,
            postnummer: None,
            nettside: None,
        };

        assert!(matches!(
            input.validate(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn opprett_input_checks_organisasjonsnummer_shape() {
        let mut input = OpprettOrganisasjonInput {
            navn: "Fagskolen Innlandet".to_string(),
            kort_navn: None,
            organisasjonstype: OrganisasjonsType::Fagskole,
            organisasjonsnummer: Some("12345678".to_string()),
            epost: None,
            telefon: None,
            adresse: None,
            poststed: None,
            postnummer: None,
            nettside: None,
        };
        assert!(input.validate().is_err());

        input.organisasjonsnummer = Some("123456789".to_string());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn oppdater_input_skips_absent_fields_on_the_wire() {
        let input = OppdaterOrganisasjonInput {
            id: OrganisasjonId::new("ntnu"),
            navn: Some("NTNU".to_string()),
            kort_navn: None,
            organisasjonstype: None,
            organisasjonsnummer: None,
            epost: None,
            telefon: None,
            adresse: None,
            poststed: None,
            postnummer: None,
            nettside: None,
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["id"], "ntnu");
        assert_eq!(json["navn"], "NTNU");
        assert!(json.get("epost").is_none());
        assert!(json.get("type").is_none());
    }

    #[test]
    fn epost_must_look_like_an_address() {
        let input = OppdaterOrganisasjonInput {
            id: OrganisasjonId::new("uio"),
            navn: None,
            kort_navn: None,
            organisasjonstype: None,
            organisasjonsnummer: None,
            epost: Some("ikke-en-epost".to_string()),
            telefon: None,
            adresse: None,
            poststed: None,
            postnummer: None,
            nettside: None,
        };
        assert!(input.validate().is_err());
    }
}
