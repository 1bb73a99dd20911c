//! Ports the stores depend on: session persistence and simulated latency.
//!
//! Adapters live in `folio-store`; tests plug in in-memory and zero-delay
//! fakes.

use std::future::Future;

use crate::session::Session;

/// Device-local key-value persistence for the session.
///
/// Not secure storage: implementations may write the session in the clear.
pub trait SessionPersistence: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Load the previously saved session. `None` if nothing was saved yet.
  fn load(
    &self,
  ) -> impl Future<Output = Result<Option<Session>, Self::Error>> + Send + '_;

  /// Replace the saved session.
  fn save<'a>(
    &'a self,
    session: &'a Session,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

/// A suspension point standing in for a network round trip.
///
/// Always completes; there is no cancellation or timeout path.
pub trait Latency: Send + Sync {
  fn wait(&self) -> impl Future<Output = ()> + Send + '_;
}
