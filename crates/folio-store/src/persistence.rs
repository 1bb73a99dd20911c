//! [`SessionPersistence`] adapters.
//!
//! The session is written in the clear. Neither adapter is secure storage.

use std::{
  convert::Infallible,
  io::ErrorKind,
  path::{Path, PathBuf},
  sync::{Arc, Mutex, PoisonError},
};

use folio_core::{ports::SessionPersistence, session::Session};

use crate::{Error, Result};

// ─── In-memory ───────────────────────────────────────────────────────────────

/// Keeps the saved session in process memory. Clones share the same slot,
/// so a test can hold one handle and inspect what the store saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
  slot: Arc<Mutex<Option<Session>>>,
}

impl MemoryPersistence {
  /// Start with `session` already saved, as if from a previous run.
  pub fn with(session: Session) -> Self {
    Self { slot: Arc::new(Mutex::new(Some(session))) }
  }

  /// The most recently saved session.
  pub fn saved(&self) -> Option<Session> {
    self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }
}

impl SessionPersistence for MemoryPersistence {
  type Error = Infallible;

  async fn load(&self) -> Result<Option<Session>, Infallible> { Ok(self.saved()) }

  async fn save(&self, session: &Session) -> Result<(), Infallible> {
    *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
    Ok(())
  }
}

// ─── JSON file ───────────────────────────────────────────────────────────────

/// Stores the session as a small JSON document on local disk.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
  path: PathBuf,
}

impl JsonFilePersistence {
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

  pub fn path(&self) -> &Path { &self.path }
}

impl SessionPersistence for JsonFilePersistence {
  type Error = Error;

  async fn load(&self) -> Result<Option<Session>> {
    let raw = match tokio::fs::read_to_string(&self.path).await {
      Ok(raw) => raw,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&raw)?))
  }

  async fn save(&self, session: &Session) -> Result<()> {
    let json = serde_json::to_vec_pretty(session)?;

    if let Some(parent) = self.path.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent).await?;
    }

    // Write to a sibling temp file then rename, so a crash never leaves a
    // half-written session behind.
    let tmp = self.path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json).await?;
    tokio::fs::rename(&tmp, &self.path).await?;
    Ok(())
  }
}
