//! [`SessionStore`]: authentication state for the admin area.

use std::sync::{PoisonError, RwLock};

use folio_core::{
  ports::{Latency, SessionPersistence},
  session::{Session, User},
};

use crate::{Credentials, Error, Result};

/// Holds the current [`Session`] and moves it between the two states:
/// `login` is the only way in, `logout` the only way out.
///
/// Every change is saved through the persistence port, and the saved session
/// is rehydrated when the store is opened.
pub struct SessionStore<P, L> {
  credentials: Credentials,
  persistence: P,
  latency:     L,
  session:     RwLock<Session>,
}

impl<P, L> SessionStore<P, L>
where
  P: SessionPersistence,
  L: Latency,
{
  /// Open the store, rehydrating whatever `persistence` saved last.
  ///
  /// An unreadable saved session, or one for a user other than the configured
  /// admin, is discarded and the store starts unauthenticated.
  pub async fn open(credentials: Credentials, persistence: P, latency: L) -> Self {
    let session = match persistence.load().await {
      Ok(Some(saved)) => {
        let foreign = saved
          .user()
          .is_some_and(|user| user.email != credentials.email());
        if foreign {
          tracing::warn!("discarding persisted session for a different user");
          Session::anonymous()
        } else {
          saved
        }
      }
      Ok(None) => Session::anonymous(),
      Err(e) => {
        tracing::warn!(error = %e, "discarding unreadable persisted session");
        Session::anonymous()
      }
    };

    if session.is_authenticated() {
      tracing::info!("restored authenticated session");
    }

    Self {
      credentials,
      persistence,
      latency,
      session: RwLock::new(session),
    }
  }

  /// Check `email`/`password` against the reference credentials after the
  /// simulated round trip.
  ///
  /// Returns `Ok(false)` on mismatch, leaving the state untouched. Only a
  /// persistence failure is an error.
  pub async fn login(&self, email: &str, password: &str) -> Result<bool> {
    self.latency.wait().await;

    if !self.credentials.verify(email, password) {
      tracing::warn!("login rejected: invalid credentials");
      return Ok(false);
    }

    let session = Session::authenticated(User { email: email.to_owned() });
    self.save(&session).await?;
    *self.session.write().unwrap_or_else(PoisonError::into_inner) = session;
    tracing::info!(email, "admin logged in");
    Ok(true)
  }

  /// Reset to unauthenticated. Calling it again is harmless.
  ///
  /// The in-memory session is cleared before saving, so a failed save only
  /// leaves a stale authenticated session on disk. That is logged and the
  /// next successful save overwrites it.
  pub async fn logout(&self) {
    let previous = std::mem::replace(
      &mut *self.session.write().unwrap_or_else(PoisonError::into_inner),
      Session::anonymous(),
    );
    if previous.is_authenticated() {
      tracing::info!("admin logged out");
    }

    if let Err(e) = self.save(&Session::anonymous()).await {
      tracing::warn!(error = %e, "failed to persist logout");
    }
  }

  pub fn session(&self) -> Session {
    self.session.read().unwrap_or_else(PoisonError::into_inner).clone()
  }

  pub fn is_authenticated(&self) -> bool {
    self
      .session
      .read()
      .unwrap_or_else(PoisonError::into_inner)
      .is_authenticated()
  }

  pub fn user(&self) -> Option<User> { self.session().user().cloned() }

  async fn save(&self, session: &Session) -> Result<()> {
    self
      .persistence
      .save(session)
      .await
      .map_err(|e| Error::Persistence(Box::new(e)))
  }
}
