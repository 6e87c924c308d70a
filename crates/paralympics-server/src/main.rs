//! Paralympics API server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), overlays
//! `PARALYMPICS_*` environment variables, opens the SQLite store and serves
//! the JSON API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use paralympics_server::ServerConfig;
use paralympics_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Paralympics REST API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("PARALYMPICS"))
    .build()
    .context("failed to read configuration")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let database_path = server_cfg.database_file();
  let store = SqliteStore::open(&database_path)
    .await
    .with_context(|| format!("failed to open database at {database_path:?}"))?;

  let app = paralympics_server::app(Arc::new(store), &server_cfg);
  let address = server_cfg.address();

  tracing::info!(
    prefix = server_cfg.mount_path().as_deref().unwrap_or("/"),
    "Listening on http://{address}"
  );
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
