//! Error type for `folio-store`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  /// The persistence port failed to save the session.
  #[error("persistence error: {0}")]
  Persistence(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// A configured password hash could not be parsed or produced.
  #[error("credential error: {0}")]
  Credential(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
