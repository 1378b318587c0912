//! Backend entry-point: loads settings, prepares the database and serves the
//! news API.

mod server;

use std::ffi::OsString;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use news_backend::inbound::http::health::HealthState;
use news_backend::outbound::persistence::{
    DbPool, DieselSeedRepository, PoolConfig, run_pending_migrations,
};
use news_backend::seeding::{SeedSettings, seed_on_startup};
use news_backend::settings::ServerSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let database_url = settings.database_url().map_err(std::io::Error::other)?;

    if settings.run_migrations() {
        run_pending_migrations(database_url)
            .await
            .map_err(std::io::Error::other)?;
    }

    let pool_config = PoolConfig::new(database_url).with_max_size(settings.pool_max_size);
    let db_pool = DbPool::new(pool_config)
        .await
        .map_err(std::io::Error::other)?;

    // Seeding only reads files and the environment; CLI flags belong to the
    // server settings above.
    let program = std::env::args_os()
        .next()
        .unwrap_or_else(|| OsString::from("news-backend"));
    let seed_settings =
        SeedSettings::load_from_iter([program]).map_err(std::io::Error::other)?;
    let seed_repository = Arc::new(DieselSeedRepository::new(db_pool.clone()));
    seed_on_startup(&seed_settings, seed_repository)
        .await
        .map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, db_pool))?;
    info!(%bind_addr, "news API listening");

    let outcome = server.await;
    health_state.mark_unhealthy();
    if let Err(err) = &outcome {
        error!(error = %err, "server stopped with an error");
    }
    outcome
}
