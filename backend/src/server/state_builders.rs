//! Selects the catalogue adapter from settings.

use std::sync::Arc;

use color_eyre::eyre::{Context as _, Result};
use tracing::info;

use camply_backend::inbound::http::state::HttpStatePorts;
use camply_backend::outbound::memory::InMemoryCatalogue;
use camply_backend::outbound::persistence::{
    DbPool, DieselCatalogueRepository, PoolConfig, run_migrations,
};
use camply_backend::settings::AppSettings;

/// Build the port bundle for the configured backing store.
///
/// A database URL selects PostgreSQL (migrations run first). Otherwise the
/// in-memory catalogue is loaded from `seed_path` or the bundled seed.
///
/// # Errors
/// Fails when migrations, the pool or the seed document cannot be loaded.
pub async fn build_ports(settings: &AppSettings) -> Result<HttpStatePorts> {
    if let Some(database_url) = settings.database_url.clone() {
        let migration_url = database_url.clone();
        tokio::task::spawn_blocking(move || run_migrations(&migration_url))
            .await
            .wrap_err("migration task panicked")??;
        let config = PoolConfig::new(database_url).with_max_size(settings.db_max_connections());
        let pool = DbPool::new(config).await?;
        info!("serving catalogue from PostgreSQL");
        return Ok(HttpStatePorts::from_adapter(Arc::new(
            DieselCatalogueRepository::new(pool),
        )));
    }

    let catalogue = match &settings.seed_path {
        Some(path) => InMemoryCatalogue::from_path(path)?,
        None => InMemoryCatalogue::bundled()?,
    };
    info!(
        providers = catalogue.provider_count(),
        "serving catalogue from memory"
    );
    Ok(HttpStatePorts::from_adapter(Arc::new(catalogue)))
}
