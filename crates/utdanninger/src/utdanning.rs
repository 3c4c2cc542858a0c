use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use strix_core::{DomainError, DomainResult, OrganisasjonId, UtdanningId};
use strix_organisasjoner::OrganisasjonSammendrag;

/// Full-time or part-time study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Studieform {
    Heltid,
    Deltid,
}

impl Studieform {
    pub fn label(&self) -> &'static str {
        match self {
            Studieform::Heltid => "Heltid",
            Studieform::Deltid => "Deltid",
        }
    }
}

/// An educational programme offered by an organisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utdanning {
    pub id: UtdanningId,
    pub navn: String,
    pub studienivaa: String,
    #[serde(default)]
    pub studiepoeng: Option<i32>,
    /// Duration in semesters.
    #[serde(default)]
    pub varighet: Option<i32>,
    #[serde(default)]
    pub studiested: Option<String>,
    #[serde(default)]
    pub undervisningssprak: Option<String>,
    #[serde(default)]
    pub beskrivelse: Option<String>,
    #[serde(default)]
    pub starttidspunkt: Option<String>,
    pub studieform: Studieform,
    pub aktiv: bool,
    #[serde(default)]
    pub opprettet: Option<NaiveDateTime>,
    #[serde(default)]
    pub organisasjon: Option<OrganisasjonSammendrag>,
}

/// Slim programme reference for embedding in other entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtdanningSammendrag {
    pub id: UtdanningId,
    pub navn: String,
    #[serde(default)]
    pub studienivaa: Option<String>,
}

/// Server-side list filter; absent fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtdanningFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studienivaa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studiested: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisasjon_id: Option<OrganisasjonId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studieform: Option<Studieform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aktiv: Option<bool>,
}

impl UtdanningFilter {
    /// The list view's default: active programmes only.
    pub fn aktive() -> Self {
        Self {
            aktiv: Some(true),
            ..Self::default()
        }
    }
}

/// Requested page of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInput {
    pub page: u32,
    pub size: u32,
}

impl Default for PageInput {
    fn default() -> Self {
        Self { page: 0, size: 20 }
    }
}

/// One page of programmes plus paging metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtdanningPage {
    pub content: Vec<Utdanning>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Input for `opprettUtdanning`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpprettUtdanningInput {
    pub navn: String,
    pub studienivaa: String,
    pub studiepoeng: i32,
    pub varighet: i32,
    pub studiested: String,
    pub undervisningssprak: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beskrivelse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starttidspunkt: Option<String>,
    pub studieform: Studieform,
    pub organisasjon_id: OrganisasjonId,
}

impl OpprettUtdanningInput {
    pub fn validate(&self) -> DomainResult<()> {
        if self.navn.trim().is_empty() {
            return Err(DomainError::validation("navn er påkrevd"));
        }
        if self.studienivaa.trim().is_empty() {
            return Err(DomainError::validation("studienivå er påkrevd"));
        }
        if self.studiepoeng <= 0 {
            return Err(DomainError::validation("studiepoeng må være positivt"));
        }
        if self.varighet <= 0 {
            return Err(DomainError::validation("varighet må være positiv"));
        }
        Ok(())
    }
}

/// Input for `oppdaterUtdanning`; absent fields keep their value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OppdaterUtdanningInput {
    pub id: UtdanningId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studienivaa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studiepoeng: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub varighet: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studiested: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub undervisningssprak: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beskrivelse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starttidspunkt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studieform: Option<Studieform>,
}

impl OppdaterUtdanningInput {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(navn) = &self.navn {
            if navn.trim().is_empty() {
                return Err(DomainError::validation("navn kan ikke være tomt"));
            }
        }
        if matches!(self.studiepoeng, Some(p) if p <= 0) {
            return Err(DomainError::validation("studiepoeng må være positivt"));
        }
        if matches!(self.varighet, Some(v) if v <= 0) {
            return Err(DomainError::validation("varighet må være positiv"));
        }
        Ok(())
    }
}
