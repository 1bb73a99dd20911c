//! JSON API for the folio admin dashboard and recruiter form.
//!
//! Exposes an axum [`Router`] backed by a [`MessageStore`] and a
//! [`SessionStore`]. TLS and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", folio_api::api_router(state))
//! ```

pub mod error;
pub mod guard;
pub mod messages;
pub mod recruiters;
pub mod session;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post, put},
};
use folio_core::ports::{Latency, SessionPersistence};
use folio_store::{MessageStore, SessionStore};

pub use error::ApiError;
pub use guard::AdminSession;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<P, L> {
  pub messages:       MessageStore,
  pub session:        Arc<SessionStore<P, L>>,
  /// Simulated round trip before a recruiter submission is stored.
  pub submit_latency: Arc<L>,
  /// Where the route guard sends unauthenticated requests.
  pub login_path:     Arc<str>,
}

impl<P, L> Clone for AppState<P, L> {
  fn clone(&self) -> Self {
    Self {
      messages:       self.messages.clone(),
      session:        Arc::clone(&self.session),
      submit_latency: Arc::clone(&self.submit_latency),
      login_path:     Arc::clone(&self.login_path),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<P, L>(state: AppState<P, L>) -> Router<()>
where
  P: SessionPersistence + 'static,
  L: Latency + 'static,
{
  Router::new()
    // Session
    .route("/session", get(session::show::<P, L>))
    .route("/session/login", post(session::login::<P, L>))
    .route("/session/logout", post(session::logout::<P, L>))
    // Public submission
    .route("/recruiters/messages", post(recruiters::submit::<P, L>))
    // Admin table
    .route("/admin/messages", get(messages::table::<P, L>))
    .route("/admin/messages/filter", put(messages::set_filter::<P, L>))
    .route(
      "/admin/messages/{id}",
      get(messages::open::<P, L>).delete(messages::delete::<P, L>),
    )
    .route("/admin/messages/{id}/read", post(messages::mark_read::<P, L>))
    .route("/admin/messages/{id}/replied", post(messages::mark_replied::<P, L>))
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
