//! Handlers for the admin message table. All routes sit behind
//! [`AdminSession`].
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/admin/messages` | Filtered view, criteria and counts |
//! | `PUT`    | `/admin/messages/filter` | Body: `{"search_term":"..","status_filter":"new"}`, both optional |
//! | `GET`    | `/admin/messages/:id` | Opens the message; `new` becomes `read` |
//! | `POST`   | `/admin/messages/:id/read` | No-op unless `new` |
//! | `POST`   | `/admin/messages/:id/replied` | No-op if already replied |
//! | `DELETE` | `/admin/messages/:id` | Idempotent |
//!
//! Status changes and deletes on unknown ids answer 204 like any other
//! no-op.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use folio_core::{
  filter::{StatusFilter, TableView},
  message::{Message, MessageId},
  ports::{Latency, SessionPersistence},
};
use serde::Deserialize;

use crate::{AppState, error::ApiError, guard::AdminSession};

// ─── Table ────────────────────────────────────────────────────────────────────

/// `GET /admin/messages`
pub async fn table<P, L>(
  _admin: AdminSession,
  State(state): State<AppState<P, L>>,
) -> Json<TableView>
where
  P: SessionPersistence + 'static,
  L: Latency + 'static,
{
  Json(state.messages.snapshot())
}

// ─── Filter ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FilterBody {
  pub search_term:   Option<String>,
  /// One of `all`, `new`, `read`, `replied`.
  pub status_filter: Option<String>,
}

/// `PUT /admin/messages/filter` — returns the refreshed [`TableView`].
pub async fn set_filter<P, L>(
  _admin: AdminSession,
  State(state): State<AppState<P, L>>,
  Json(body): Json<FilterBody>,
) -> Result<Json<TableView>, ApiError>
where
  P: SessionPersistence + 'static,
  L: Latency + 'static,
{
  // Parse before touching the store so a bad filter changes nothing.
  let status = body
    .status_filter
    .as_deref()
    .map(str::parse::<StatusFilter>)
    .transpose()?;

  if let Some(term) = body.search_term {
    state.messages.set_search_term(term);
  }
  if let Some(status) = status {
    state.messages.set_status_filter(status);
  }
  Ok(Json(state.messages.snapshot()))
}

// ─── Single message ───────────────────────────────────────────────────────────

/// `GET /admin/messages/:id`
pub async fn open<P, L>(
  _admin: AdminSession,
  State(state): State<AppState<P, L>>,
  Path(id): Path<String>,
) -> Result<Json<Message>, ApiError>
where
  P: SessionPersistence + 'static,
  L: Latency + 'static,
{
  state
    .messages
    .open_message(&MessageId::from(id.as_str()))
    .map(Json)
    .ok_or_else(|| ApiError::NotFound(format!("message {id} not found")))
}

/// `POST /admin/messages/:id/read`
pub async fn mark_read<P, L>(
  _admin: AdminSession,
  State(state): State<AppState<P, L>>,
  Path(id): Path<String>,
) -> StatusCode
where
  P: SessionPersistence + 'static,
  L: Latency + 'static,
{
  state.messages.mark_as_read(&MessageId::from(id));
  StatusCode::NO_CONTENT
}

/// `POST /admin/messages/:id/replied`
pub async fn mark_replied<P, L>(
  _admin: AdminSession,
  State(state): State<AppState<P, L>>,
  Path(id): Path<String>,
) -> StatusCode
where
  P: SessionPersistence + 'static,
  L: Latency + 'static,
{
  state.messages.mark_as_replied(&MessageId::from(id));
  StatusCode::NO_CONTENT
}

/// `DELETE /admin/messages/:id`
pub async fn delete<P, L>(
  _admin: AdminSession,
  State(state): State<AppState<P, L>>,
  Path(id): Path<String>,
) -> StatusCode
where
  P: SessionPersistence + 'static,
  L: Latency + 'static,
{
  state.messages.delete_message(&MessageId::from(id));
  StatusCode::NO_CONTENT
}
