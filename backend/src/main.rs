//! Backend entry-point: loads settings, prepares storage and serves the API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use recitation_backend::inbound::http::health::HealthState;
use recitation_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use recitation_backend::settings::AppSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .wrap_err("failed to load settings")?;
    let bind_addr = settings.bind_addr();
    let mut config = ServerConfig::new(bind_addr).with_role_names(settings.role_names());

    match settings.database_url.as_deref() {
        Some(url) => {
            if settings.run_migrations() {
                let applied = run_pending_migrations(url)
                    .await
                    .wrap_err("failed to apply migrations")?;
                info!(applied, "database migrations applied");
            }
            let pool = DbPool::new(
                PoolConfig::new(url).with_max_size(settings.db_max_connections()),
            )
            .await
            .wrap_err("failed to build database pool")?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database url configured; lists and history are kept in memory"),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).await?;
    info!(%bind_addr, "server listening");
    server.await?;
    Ok(())
}
