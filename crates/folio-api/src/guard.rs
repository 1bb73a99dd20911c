//! Route guard for the admin area.

use axum::{extract::FromRequestParts, http::request::Parts};
use folio_core::{
  ports::{Latency, SessionPersistence},
  session::User,
};

use crate::{AppState, error::ApiError};

/// Present in a handler's arguments means the admin is logged in.
///
/// Otherwise the request is redirected to the login entry point and the
/// handler never runs, so nothing of the protected content is rendered.
/// The session is rehydrated before the server starts listening, so the
/// check is made immediately with no grace period.
pub struct AdminSession(pub User);

impl<P, L> FromRequestParts<AppState<P, L>> for AdminSession
where
  P: SessionPersistence + 'static,
  L: Latency + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<P, L>,
  ) -> Result<Self, Self::Rejection> {
    match state.session.user() {
      Some(user) => Ok(AdminSession(user)),
      None => {
        tracing::debug!(path = %parts.uri.path(), "redirecting unauthenticated request");
        Err(ApiError::LoginRequired(state.login_path.to_string()))
      }
    }
  }
}
