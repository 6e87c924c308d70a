//! HTTP server assembly for the Paralympics API.
//!
//! Holds the runtime configuration and wraps [`paralympics_api::api_router`]
//! in the outer router the binary serves.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use paralympics_core::store::ParalympicsStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `PARALYMPICS_*` environment variables. Every key is optional.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  /// SQLite database file. A leading `~/` resolves against `$HOME`.
  pub database_path: PathBuf,
  /// Path the API is mounted under. Empty or `/` mounts it at the root.
  pub api_prefix:    String,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:          "127.0.0.1".to_string(),
      port:          8000,
      database_path: PathBuf::from("paralympics.db"),
      api_prefix:    "/api".to_string(),
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// `database_path` with a leading `~/` replaced by `$HOME`.
  pub fn database_file(&self) -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    under_home(&self.database_path, home.as_deref())
  }

  /// `api_prefix` as a nestable path (`/api`), or `None` for the root.
  pub fn mount_path(&self) -> Option<String> {
    let trimmed = self.api_prefix.trim_matches('/');
    (!trimmed.is_empty()).then(|| format!("/{trimmed}"))
  }
}

fn under_home(path: &Path, home: Option<&Path>) -> PathBuf {
  match (path.strip_prefix("~"), home) {
    (Ok(rest), Some(home)) => home.join(rest),
    _ => path.to_path_buf(),
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the served application: the API mounted at the configured prefix,
/// with a request tracing layer around everything.
pub fn app<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: ParalympicsStore + 'static,
{
  let api = paralympics_api::api_router(store);
  let router = match config.mount_path() {
    Some(path) => Router::new().nest(&path, api),
    None => api,
  };
  router.layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use paralympics_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  async fn status(app: Router, uri: &str) -> StatusCode {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(req).await.unwrap().status()
  }

  #[test]
  fn mount_path_normalises_prefix() {
    let mut config = ServerConfig::default();
    assert_eq!(config.mount_path().as_deref(), Some("/api"));

    config.api_prefix = "v1/".into();
    assert_eq!(config.mount_path().as_deref(), Some("/v1"));

    config.api_prefix = "/".into();
    assert_eq!(config.mount_path(), None);
  }

  #[test]
  fn tilde_resolves_against_home() {
    let home = Path::new("/home/ana");
    assert_eq!(
      under_home(Path::new("~/data/paralympics.db"), Some(home)),
      PathBuf::from("/home/ana/data/paralympics.db")
    );
    assert_eq!(
      under_home(Path::new("paralympics.db"), Some(home)),
      PathBuf::from("paralympics.db")
    );
    assert_eq!(under_home(Path::new("~/x.db"), None), PathBuf::from("~/x.db"));
    assert_eq!(
      under_home(Path::new("/srv/~user.db"), Some(home)),
      PathBuf::from("/srv/~user.db")
    );
  }

  #[test]
  fn address_joins_host_and_port() {
    assert_eq!(ServerConfig::default().address(), "127.0.0.1:8000");
  }

  #[tokio::test]
  async fn api_is_served_under_prefix() {
    let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());
    let config = ServerConfig::default();

    assert_eq!(status(app(store.clone(), &config), "/api/health").await, StatusCode::OK);
    assert_eq!(status(app(store, &config), "/health").await, StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn empty_prefix_mounts_at_root() {
    let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());
    let config = ServerConfig { api_prefix: String::new(), ..Default::default() };

    assert_eq!(status(app(store, &config), "/games").await, StatusCode::OK);
  }
}
