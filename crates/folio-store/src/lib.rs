//! In-memory stores for the folio admin area.
//!
//! [`MessageStore`] owns the opportunity messages and their filtered view;
//! [`SessionStore`] gates the admin area behind the reference credentials.
//! Both are explicit values: construct one per process (or per test) and hand
//! it to whatever serves the UI.

mod messages;
mod seed;
mod session;

pub mod credentials;
pub mod error;
pub mod latency;
pub mod persistence;

pub use credentials::Credentials;
pub use error::{Error, Result};
pub use messages::MessageStore;
pub use seed::sample_messages;
pub use session::SessionStore;
