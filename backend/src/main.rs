//! Service entry-point: loads settings, prepares storage and serves HTTP.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context as _, Result};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use eventform::inbound::http::health::HealthState;
use eventform::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use eventform::settings::AppSettings;

use server::{ServerConfig, create_server};

async fn connect(settings: &AppSettings, database_url: &str) -> Result<DbPool> {
    if settings.run_migrations {
        run_migrations(database_url)
            .await
            .wrap_err("applying database migrations")?;
    }
    let config = PoolConfig::new(database_url).with_max_size(settings.pool_max_size());
    DbPool::new(config)
        .await
        .wrap_err("building the database pool")
}

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

    let settings = AppSettings::load().wrap_err("loading settings")?;
    let bind_addr = settings.bind_addr()?;

    let mut config = ServerConfig::new(bind_addr);
    match settings.database_url() {
        Some(url) => {
            let pool = connect(&settings, url).await?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database configured; serving fixture data"),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("starting the HTTP server")?;
    info!(%bind_addr, "listening");
    server.await.wrap_err("running the HTTP server")
}
