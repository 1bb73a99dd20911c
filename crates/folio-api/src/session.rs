//! Handlers for `/session` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/session` | Current session |
//! | `POST` | `/session/login` | Body: `{"email":"...","password":"..."}`; 401 on mismatch |
//! | `POST` | `/session/logout` | Always 204 |

use axum::{Json, extract::State, http::StatusCode};
use folio_core::{
  form::LoginForm,
  ports::{Latency, SessionPersistence},
  session::Session,
};

use crate::{AppState, error::ApiError};

/// `GET /session`
pub async fn show<P, L>(State(state): State<AppState<P, L>>) -> Json<Session>
where
  P: SessionPersistence + 'static,
  L: Latency + 'static,
{
  Json(state.session.session())
}

/// `POST /session/login` — returns the new session on success.
pub async fn login<P, L>(
  State(state): State<AppState<P, L>>,
  Json(form): Json<LoginForm>,
) -> Result<Json<Session>, ApiError>
where
  P: SessionPersistence + 'static,
  L: Latency + 'static,
{
  form.validate()?;

  if state.session.login(form.email.trim(), &form.password).await? {
    Ok(Json(state.session.session()))
  } else {
    Err(ApiError::InvalidCredentials)
  }
}

/// `POST /session/logout`
pub async fn logout<P, L>(State(state): State<AppState<P, L>>) -> StatusCode
where
  P: SessionPersistence + 'static,
  L: Latency + 'static,
{
  state.session.logout().await;
  StatusCode::NO_CONTENT
}
