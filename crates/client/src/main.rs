//! Demo driver: restore (or log in), then list organisations.
//!
//! Usage: `strix-client [email]` — with an email, performs the dev login
//! exchange first (all demo users share the fixed password).

use strix_client::{StrixClient, StrixConfig};
use strix_organisasjoner::{antall_aktive, kun_aktive};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    strix_observability::init();

    let config = StrixConfig::from_env();
    let mut client = StrixClient::new(&config)?;

    client.restore();
    if client.is_authenticated() {
        tracing::info!(role = %client.selected_role(), "session restored from disk");
    }

    if let Some(email) = std::env::args().nth(1) {
        client.login(&email).await?;
        tracing::info!(email = %email, role = %client.selected_role(), "logged in");
    }

    let organisasjoner = client.organisasjoner().await?;
    tracing::info!(
        antall = organisasjoner.len(),
        aktive = antall_aktive(&organisasjoner),
        "hentet organisasjoner"
    );

    for org in kun_aktive(&organisasjoner) {
        tracing::info!(id = %org.id, navn = %org.navn, type_ = ?org.organisasjonstype, "aktiv organisasjon");
    }

    Ok(())
}
