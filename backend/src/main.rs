//! Backend entry-point: loads settings, selects the catalogue adapter and
//! serves the REST API.

mod server;

use std::io::IsTerminal as _;

use actix_web::web;
use color_eyre::eyre::{Result, eyre};
use ortho_config::OrthoConfig as _;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use camply_backend::inbound::http::health::HealthState;
use camply_backend::settings::AppSettings;
use server::{ServerConfig, build_ports, create_server};

fn init_tracing(json: bool) {
    let builder = fmt().with_env_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    );
    let result = if json {
        builder.json().try_init()
    } else {
        builder
            .with_ansi(std::io::stdout().is_terminal())
            .try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = AppSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    init_tracing(settings.json_logs);

    let bind_addr = settings.bind_addr()?;
    let ports = build_ports(&settings).await?;
    let config =
        ServerConfig::new(bind_addr, ports).with_allowed_origins(settings.allowed_origins());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "camply backend listening");
    server.await?;
    Ok(())
}
