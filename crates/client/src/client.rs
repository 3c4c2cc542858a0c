//! The view-facing handle: session store + gateway behind one object.
//!
//! Views depend only on this typed contract; the session's credential is
//! attached to every operation automatically.

use strix_auth::{Bruker, Role};
use strix_core::{OpptakId, OrganisasjonId, UtdanningId};
use strix_gateway::{Gateway, GatewayError, OperationError};
use strix_opptak as opptak;
use strix_opptak::{
    EndreOpptaksStatusInput, OppdaterOpptakInput, OpprettOpptakInput, Opptak, OpptakAktivEcho,
    OpptakRef, OpptakStatusEcho, OpptaksStatus,
};
use strix_organisasjoner as organisasjoner;
use strix_organisasjoner::{
    AktivStatus, OppdaterOrganisasjonInput, OpprettOrganisasjonInput, Organisasjon,
};
use strix_session::{CredentialStore, FileCredentialStore, LoginError, SessionStore};
use strix_utdanninger as utdanninger;
use strix_utdanninger::{
    OppdaterUtdanningInput, OpprettUtdanningInput, PageInput, Utdanning, UtdanningAktivStatus,
    UtdanningFilter, UtdanningPage,
};

use crate::config::StrixConfig;

pub struct StrixClient {
    gateway: Gateway,
    session: SessionStore,
}

impl StrixClient {
    /// Client with the default file-backed session storage.
    pub fn new(config: &StrixConfig) -> anyhow::Result<Self> {
        let storage = FileCredentialStore::new()?;
        Self::with_storage(config, Box::new(storage))
    }

    /// Client with injected storage (tests, ephemeral sessions).
    pub fn with_storage(
        config: &StrixConfig,
        storage: Box<dyn CredentialStore>,
    ) -> anyhow::Result<Self> {
        let session = SessionStore::new(storage)?;
        Ok(Self {
            gateway: Gateway::new(config.graphql_url.clone()),
            session,
        })
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    // ── session lifecycle ────────────────────────────────────────────────

    pub fn restore(&mut self) {
        self.session.restore();
    }

    pub async fn login(&mut self, email: &str) -> Result<(), LoginError> {
        self.session.login(&self.gateway, email).await
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn selected_role(&self) -> Role {
        self.session.selected_role()
    }

    pub fn set_selected_role(&mut self, role: Role) {
        self.session.set_selected_role(role);
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.session.has_permission(permission)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn bruker(&self) -> Option<&Bruker> {
        self.session.bruker()
    }

    fn credential(&self) -> Option<&str> {
        self.session.token()
    }

    // ── organisasjoner ───────────────────────────────────────────────────

    pub async fn organisasjoner(&self) -> Result<Vec<Organisasjon>, GatewayError> {
        organisasjoner::hent_organisasjoner(&self.gateway, self.credential()).await
    }

    pub async fn organisasjon(
        &self,
        id: &OrganisasjonId,
    ) -> Result<Option<Organisasjon>, GatewayError> {
        organisasjoner::hent_organisasjon(&self.gateway, id, self.credential()).await
    }

    pub async fn opprett_organisasjon(
        &self,
        input: &OpprettOrganisasjonInput,
    ) -> Result<Organisasjon, OperationError> {
        organisasjoner::opprett_organisasjon(&self.gateway, input, self.credential()).await
    }

    pub async fn oppdater_organisasjon(
        &self,
        input: &OppdaterOrganisasjonInput,
    ) -> Result<Organisasjon, OperationError> {
        organisasjoner::oppdater_organisasjon(&self.gateway, input, self.credential()).await
    }

    pub async fn deaktiver_organisasjon(
        &self,
        id: &OrganisasjonId,
    ) -> Result<AktivStatus, GatewayError> {
        organisasjoner::deaktiver_organisasjon(&self.gateway, id, self.credential()).await
    }

    pub async fn reaktiver_organisasjon(
        &self,
        id: &OrganisasjonId,
    ) -> Result<AktivStatus, GatewayError> {
        organisasjoner::reaktiver_organisasjon(&self.gateway, id, self.credential()).await
    }

    // ── utdanninger ──────────────────────────────────────────────────────

    pub async fn utdanninger(
        &self,
        filter: &UtdanningFilter,
        page: PageInput,
    ) -> Result<UtdanningPage, GatewayError> {
        utdanninger::hent_utdanninger(&self.gateway, filter, page, self.credential()).await
    }

    pub async fn opprett_utdanning(
        &self,
        input: &OpprettUtdanningInput,
    ) -> Result<Utdanning, OperationError> {
        utdanninger::opprett_utdanning(&self.gateway, input, self.credential()).await
    }

    pub async fn oppdater_utdanning(
        &self,
        input: &OppdaterUtdanningInput,
    ) -> Result<Utdanning, OperationError> {
        utdanninger::oppdater_utdanning(&self.gateway, input, self.credential()).await
    }

    pub async fn aktiver_utdanning(
        &self,
        id: &UtdanningId,
    ) -> Result<UtdanningAktivStatus, GatewayError> {
        utdanninger::aktiver_utdanning(&self.gateway, id, self.credential()).await
    }

    pub async fn deaktiver_utdanning(
        &self,
        id: &UtdanningId,
    ) -> Result<UtdanningAktivStatus, GatewayError> {
        utdanninger::deaktiver_utdanning(&self.gateway, id, self.credential()).await
    }

    pub async fn slett_utdanning(&self, id: &UtdanningId) -> Result<bool, GatewayError> {
        utdanninger::slett_utdanning(&self.gateway, id, self.credential()).await
    }

    // ── opptak ───────────────────────────────────────────────────────────

    pub async fn alle_opptak(&self) -> Result<Vec<Opptak>, GatewayError> {
        opptak::hent_alle_opptak(&self.gateway, self.credential()).await
    }

    pub async fn opptak(&self, id: &OpptakId) -> Result<Option<Opptak>, GatewayError> {
        opptak::hent_opptak(&self.gateway, id, self.credential()).await
    }

    pub async fn opprett_opptak(
        &self,
        input: &OpprettOpptakInput,
    ) -> Result<Opptak, OperationError> {
        opptak::opprett_opptak(&self.gateway, input, self.credential()).await
    }

    pub async fn oppdater_opptak(
        &self,
        input: &OppdaterOpptakInput,
    ) -> Result<Opptak, OperationError> {
        opptak::oppdater_opptak(&self.gateway, input, self.credential()).await
    }

    pub async fn endre_opptak_status(
        &self,
        gjeldende: OpptaksStatus,
        input: &EndreOpptaksStatusInput,
    ) -> Result<OpptakStatusEcho, OperationError> {
        opptak::endre_opptak_status(&self.gateway, gjeldende, input, self.credential()).await
    }

    pub async fn deaktiver_opptak(&self, id: &OpptakId) -> Result<OpptakAktivEcho, GatewayError> {
        opptak::deaktiver_opptak(&self.gateway, id, self.credential()).await
    }

    pub async fn reaktiver_opptak(&self, id: &OpptakId) -> Result<OpptakAktivEcho, GatewayError> {
        opptak::reaktiver_opptak(&self.gateway, id, self.credential()).await
    }

    pub async fn gi_organisasjon_opptak_tilgang(
        &self,
        opptak_id: &OpptakId,
        organisasjon_id: &OrganisasjonId,
    ) -> Result<OpptakRef, GatewayError> {
        opptak::gi_organisasjon_opptak_tilgang(
            &self.gateway,
            opptak_id,
            organisasjon_id,
            self.credential(),
        )
        .await
    }

    pub async fn fjern_organisasjon_opptak_tilgang(
        &self,
        opptak_id: &OpptakId,
        organisasjon_id: &OrganisasjonId,
    ) -> Result<OpptakRef, GatewayError> {
        opptak::fjern_organisasjon_opptak_tilgang(
            &self.gateway,
            opptak_id,
            organisasjon_id,
            self.credential(),
        )
        .await
    }
}
