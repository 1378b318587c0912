//! Apply migrations and replace the database contents with a fixture dataset.
//!
//! ```text
//! news-seed --database-url postgres://localhost/nc_news --environment test
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use news_backend::domain::DatasetSeeder;
use news_backend::outbound::persistence::{
    DbPool, DieselSeedRepository, PoolConfig, run_pending_migrations,
};
use news_backend::seeding::{SeedSettings, load_dataset};

#[derive(Debug, Parser)]
#[command(name = "news-seed", about = "Seed the news database with fixture data")]
struct Args {
    /// PostgreSQL connection URL.
    #[arg(long, env = "NEWS_DATABASE_URL")]
    database_url: String,
    /// Bundled dataset: `test` or `development`.
    #[arg(long, env = "NEWS_SEED_ENVIRONMENT", default_value = "development")]
    environment: String,
    /// Read fixtures from this directory instead of a bundled dataset.
    #[arg(long, env = "NEWS_SEED_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

impl From<Args> for SeedSettings {
    fn from(args: Args) -> Self {
        Self {
            enabled: Some(true),
            environment: Some(args.environment),
            data_dir: args.data_dir,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .try_init()
        .ok();

    let args = Args::parse();
    let database_url = args.database_url.clone();
    let settings = SeedSettings::from(args);

    let dataset = load_dataset(&settings).wrap_err("failed to load fixtures")?;
    run_pending_migrations(&database_url)
        .await
        .wrap_err("failed to apply migrations")?;

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(1))
        .await
        .wrap_err("failed to connect to the database")?;
    let summary = DatasetSeeder::new(Arc::new(DieselSeedRepository::new(pool)))
        .seed(dataset)
        .await
        .wrap_err("seeding failed")?;

    info!(
        articles = summary.articles,
        comments = summary.comments,
        "news database seeded"
    );
    Ok(())
}
