//! Wiring for the folio server: configuration, state construction and the
//! top-level router.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use axum::Router;
use folio_api::AppState;
use folio_store::{
  Credentials,
  MessageStore,
  SessionStore,
  latency::TokioDelay,
  persistence::JsonFilePersistence,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `FOLIO_*` environment variables. Every key has a default.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:                String,
  pub port:                u16,
  /// Where the route guard redirects unauthenticated admin requests.
  pub login_path:          String,
  /// Device-local file the session is persisted to.
  pub session_path:        PathBuf,
  pub admin_email:         String,
  /// argon2 PHC string. When unset, the reference password is hashed at
  /// startup.
  pub admin_password_hash: Option<String>,
  pub login_latency_ms:    u64,
  pub submit_latency_ms:   u64,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:                "127.0.0.1".to_string(),
      port:                3000,
      login_path:          "/login".to_string(),
      session_path:        PathBuf::from("folio-session.json"),
      admin_email:         Credentials::REFERENCE_EMAIL.to_string(),
      admin_password_hash: None,
      login_latency_ms:    1000,
      submit_latency_ms:   1000,
    }
  }
}

impl ServerConfig {
  /// Layer `path` (optional) under `FOLIO_*` environment variables.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("FOLIO"))
      .build()
      .context("failed to read config file")?
      .try_deserialize()
      .context("failed to deserialise ServerConfig")
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn credentials(&self) -> folio_store::Result<Credentials> {
    match &self.admin_password_hash {
      Some(hash) => Credentials::new(&self.admin_email, hash.as_str()),
      None => {
        Credentials::from_plaintext(&self.admin_email, Credentials::REFERENCE_PASSWORD)
      }
    }
  }
}

// ─── State & router ───────────────────────────────────────────────────────────

pub type ServerState = AppState<JsonFilePersistence, TokioDelay>;

/// Build the stores. The persisted session is rehydrated here, before the
/// server accepts any request.
pub async fn build_state(cfg: &ServerConfig) -> anyhow::Result<ServerState> {
  let credentials = cfg
    .credentials()
    .context("failed to build admin credentials")?;
  let persistence = JsonFilePersistence::new(expand_tilde(&cfg.session_path));

  let session = SessionStore::open(
    credentials,
    persistence,
    TokioDelay::from_millis(cfg.login_latency_ms),
  )
  .await;

  Ok(AppState {
    messages:       MessageStore::seeded(),
    session:        Arc::new(session),
    submit_latency: Arc::new(TokioDelay::from_millis(cfg.submit_latency_ms)),
    login_path:     Arc::from(cfg.login_path.as_str()),
  })
}

/// The API nested under `/api`, with request tracing.
pub fn app(state: ServerState) -> Router {
  Router::new()
    .nest("/api", folio_api::api_router(state))
    .layer(TraceLayer::new_for_http())
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use tower::ServiceExt as _;

  use super::*;

  fn test_config(dir: &Path) -> ServerConfig {
    ServerConfig {
      session_path: dir.join("session.json"),
      login_latency_ms: 0,
      submit_latency_ms: 0,
      ..ServerConfig::default()
    }
  }

  #[test]
  fn defaults() {
    let cfg = ServerConfig::default();
    assert_eq!(cfg.address(), "127.0.0.1:3000");
    assert_eq!(cfg.admin_email, "admin@portfolio.com");
    assert_eq!(cfg.login_latency_ms, 1000);
    assert!(cfg.admin_password_hash.is_none());
  }

  #[test]
  fn load_reads_toml_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = 4100\nlogin_path = \"/signin\"\n").unwrap();

    let cfg = ServerConfig::load(&path).unwrap();
    assert_eq!(cfg.port, 4100);
    assert_eq!(cfg.login_path, "/signin");
    assert_eq!(cfg.host, "127.0.0.1");
  }

  #[test]
  fn missing_config_file_is_fine() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ServerConfig::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg.session_path, PathBuf::from("folio-session.json"));
  }

  #[test]
  fn configured_hash_is_used() {
    let hash = folio_store::credentials::hash_password("s3cret-pass").unwrap();
    let cfg = ServerConfig {
      admin_password_hash: Some(hash),
      ..ServerConfig::default()
    };
    let creds = cfg.credentials().unwrap();
    assert!(creds.verify("admin@portfolio.com", "s3cret-pass"));
    assert!(!creds.verify("admin@portfolio.com", "admin123"));
  }

  #[test]
  fn expand_tilde_leaves_plain_paths() {
    assert_eq!(expand_tilde(Path::new("a/b.json")), PathBuf::from("a/b.json"));
  }

  #[tokio::test]
  async fn login_persists_across_rebuilds() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = test_config(dir.path());

    let state = build_state(&cfg).await.unwrap();
    let resp = app(state)
      .oneshot(
        Request::builder()
          .method("POST")
          .uri("/api/session/login")
          .header(header::CONTENT_TYPE, "application/json")
          .body(Body::from(
            serde_json::json!({
              "email": "admin@portfolio.com",
              "password": "admin123"
            })
            .to_string(),
          ))
          .unwrap(),
      )
      .await
      .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let restarted = build_state(&cfg).await.unwrap();
    assert!(restarted.session.is_authenticated());
    // Messages are always reseeded.
    assert_eq!(restarted.messages.all_messages().len(), 4);

    let resp = app(restarted)
      .oneshot(
        Request::builder()
          .uri("/api/admin/messages")
          .body(Body::empty())
          .unwrap(),
      )
      .await
      .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
  }
}
