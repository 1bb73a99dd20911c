//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use folio_core::form::FieldErrors;
use serde_json::json;
use thiserror::Error;

/// Shown for any credential mismatch; never says which field was wrong.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password. Please try again.";

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The route guard turned the request away; carries the login location.
  #[error("login required")]
  LoginRequired(String),

  #[error("invalid credentials")]
  InvalidCredentials,

  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("validation failed: {0}")]
  Validation(FieldErrors),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<folio_core::Error> for ApiError {
  fn from(e: folio_core::Error) -> Self {
    match e {
      folio_core::Error::Validation(fields) => Self::Validation(fields),
      folio_core::Error::UnknownStatus(s) => {
        Self::BadRequest(format!("unknown status filter {s:?}"))
      }
    }
  }
}

impl From<folio_store::Error> for ApiError {
  fn from(e: folio_store::Error) -> Self { Self::Store(Box::new(e)) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::LoginRequired(location) => {
        let mut res =
          (StatusCode::SEE_OTHER, Json(json!({ "error": "login required" })))
            .into_response();
        if let Ok(value) = HeaderValue::from_str(&location) {
          res.headers_mut().insert(header::LOCATION, value);
        }
        res
      }
      ApiError::InvalidCredentials => {
        (StatusCode::UNAUTHORIZED, Json(json!({ "error": INVALID_CREDENTIALS })))
          .into_response()
      }
      ApiError::NotFound(m) => {
        (StatusCode::NOT_FOUND, Json(json!({ "error": m }))).into_response()
      }
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": m }))).into_response()
      }
      ApiError::Validation(fields) => (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": "validation failed", "fields": fields })),
      )
        .into_response(),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": e.to_string() })))
          .into_response()
      }
    }
  }
}
