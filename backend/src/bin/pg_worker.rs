//! Helper binary invoked by `pg_embedded_setup_unpriv` when the database
//! integration tests run as root.
//!
//! Usage: `pg-worker <setup|start|stop> <payload.json>`. The payload is a
//! serialised [`WorkerPayload`].

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Report, Result};
use pg_embedded_setup_unpriv::worker::{PlainSecret, WorkerPayload};
use postgresql_embedded::PostgreSQL;
use tokio::runtime::Builder;

#[derive(Debug, Parser)]
#[command(name = "pg-worker", about = "Drive an embedded PostgreSQL instance")]
struct Args {
    /// Lifecycle step to perform.
    #[arg(value_enum)]
    operation: Operation,
    /// JSON payload describing settings and environment.
    config: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Operation {
    Setup,
    Start,
    Stop,
}

impl Operation {
    fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    run(env::args_os())
}

fn run(args: impl IntoIterator<Item = OsString>) -> Result<()> {
    let args = Args::try_parse_from(args)?;
    let payload = read_payload(&args.config)?;
    execute(args.operation, payload)
}

fn read_payload(path: &Path) -> Result<WorkerPayload> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read worker config at {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse worker config at {}", path.display()))
}

fn execute(operation: Operation, payload: WorkerPayload) -> Result<()> {
    let settings = payload
        .settings
        .into_settings()
        .map_err(|err| Report::new(err).wrap_err("failed to rebuild postgres settings"))?;
    export_environment(&payload.environment);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build worker runtime")?;

    let mut postgres = PostgreSQL::new(settings);
    runtime
        .block_on(async move {
            match operation {
                Operation::Setup => postgres.setup().await,
                Operation::Start => postgres.start().await,
                Operation::Stop => postgres.stop().await,
            }
        })
        .with_context(|| format!("embedded postgres {} failed", operation.as_str()))
}

fn export_environment(vars: &[(String, Option<PlainSecret>)]) {
    for (key, value) in vars {
        // SAFETY: runs on the main thread before the runtime spawns workers.
        match value {
            Some(value) => unsafe { env::set_var(key, value.expose()) },
            None => unsafe { env::remove_var(key) },
        }
    }
}
