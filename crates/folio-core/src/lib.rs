//! Core types and port definitions for the folio admin message store.
//!
//! This crate is deliberately free of HTTP and I/O dependencies. The store,
//! API and server crates depend on it.

pub mod error;
pub mod filter;
pub mod form;
pub mod message;
pub mod ports;
pub mod session;

pub use error::{Error, Result};
