//! Load a JSON catalogue seed into PostgreSQL.
//!
//! Applies pending migrations, upserts providers, recreation areas and
//! campgrounds, then rebuilds the search index. `--check` validates the
//! document without touching the database.

use std::ffi::OsString;
use std::path::PathBuf;

use camply_backend::outbound::memory::read_seed_file;
use camply_backend::outbound::persistence::{
    DbPool, DieselCatalogueSeeder, PoolConfig, run_migrations,
};
use camply_backend::settings::AppSettings;
use clap::Parser;
use color_eyre::eyre::{Context as _, Result, eyre};
use ortho_config::OrthoConfig as _;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// Command-line options for the seed tool.
#[derive(Debug, Parser)]
#[command(name = "seed-catalogue", about = "Load a catalogue seed into PostgreSQL")]
struct Cli {
    /// JSON seed document to load.
    #[arg(default_value = "backend/fixtures/catalogue.json")]
    seed: PathBuf,
    /// PostgreSQL URL; falls back to `CAMPLY_DATABASE_URL`.
    #[arg(long)]
    database_url: Option<String>,
    /// Validate the seed and exit without connecting.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let seed = read_seed_file(&cli.seed)
        .wrap_err_with(|| format!("loading {}", cli.seed.display()))?;
    info!(
        providers = seed.providers.len(),
        recreation_areas = seed.recreation_areas.len(),
        campgrounds = seed.campgrounds.len(),
        "seed document is valid"
    );
    if cli.check {
        return Ok(());
    }

    let database_url = match cli.database_url {
        Some(url) => url,
        None => AppSettings::load_from_iter([OsString::from("seed-catalogue")])
            .map_err(|err| eyre!("failed to load settings: {err}"))?
            .database_url
            .ok_or_else(|| {
                eyre!("no database URL: pass --database-url or set CAMPLY_DATABASE_URL")
            })?,
    };

    let migration_url = database_url.clone();
    tokio::task::spawn_blocking(move || run_migrations(&migration_url))
        .await
        .wrap_err("migration task panicked")??;

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(2)).await?;
    let summary = DieselCatalogueSeeder::new(pool).write(&seed).await?;
    info!(search_rows = summary.search_rows, "catalogue seeded");
    Ok(())
}
