//! [`MessageStore`]: the in-memory message collection and its filtered view.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use folio_core::{
  filter::{FilterCriteria, MessageCounts, StatusFilter, TableView, project},
  message::{Message, MessageId, MessageStatus, NewMessage},
};

use crate::seed::sample_messages;

// ─── State ───────────────────────────────────────────────────────────────────

#[derive(Debug)]
struct State {
  /// Newest first.
  messages: Vec<Message>,
  criteria: FilterCriteria,
  /// Always `project(&messages, &criteria)` as of the last mutation.
  filtered: Vec<Message>,
}

impl State {
  fn refresh(&mut self) { self.filtered = project(&self.messages, &self.criteria); }

  fn position(&self, id: &MessageId) -> Option<usize> {
    self.messages.iter().position(|m| &m.id == id)
  }

  fn fresh_id(&self) -> MessageId {
    loop {
      let id = MessageId::generate();
      if self.position(&id).is_none() {
        return id;
      }
    }
  }

  /// Apply `transition` to the message with `id`. Returns whether the status
  /// actually changed.
  fn transition(
    &mut self,
    id: &MessageId,
    transition: fn(MessageStatus) -> MessageStatus,
  ) -> bool {
    let Some(idx) = self.position(id) else {
      tracing::debug!(%id, "status change for unknown message ignored");
      return false;
    };
    let msg = &mut self.messages[idx];
    let next = transition(msg.status);
    if next == msg.status {
      return false;
    }
    tracing::debug!(%id, from = %msg.status, to = %next, "message status changed");
    msg.status = next;
    self.refresh();
    true
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// Owns the message collection, the filter criteria and the derived view.
///
/// Cloning is cheap; clones share the same underlying state. Every mutator
/// recomputes the filtered view before releasing the lock, so readers see
/// either the state before a mutation or after it, never in between.
#[derive(Debug, Clone)]
pub struct MessageStore {
  state: Arc<RwLock<State>>,
}

impl Default for MessageStore {
  fn default() -> Self { Self::seeded() }
}

impl MessageStore {
  /// A store holding `messages`, which must already be newest first.
  pub fn new(messages: Vec<Message>) -> Self {
    let mut state = State {
      messages,
      criteria: FilterCriteria::default(),
      filtered: Vec::new(),
    };
    state.refresh();
    Self { state: Arc::new(RwLock::new(state)) }
  }

  /// A store pre-seeded with the fixed sample set.
  pub fn seeded() -> Self { Self::new(sample_messages()) }

  pub fn empty() -> Self { Self::new(Vec::new()) }

  fn read(&self) -> RwLockReadGuard<'_, State> {
    self.state.read().unwrap_or_else(PoisonError::into_inner)
  }

  fn write(&self) -> RwLockWriteGuard<'_, State> {
    self.state.write().unwrap_or_else(PoisonError::into_inner)
  }

  // ── Mutators ──────────────────────────────────────────────────────────────

  /// Store a new submission at the head of the collection with a fresh id,
  /// the current time and status `new`.
  pub fn add_message(&self, input: NewMessage) -> Message {
    let mut state = self.write();
    let message = input.into_message(state.fresh_id(), Utc::now());
    state.messages.insert(0, message.clone());
    state.refresh();
    tracing::info!(id = %message.id, company = %message.company, "message received");
    message
  }

  /// `new -> read`. Anything else, including an unknown id, is a no-op.
  pub fn mark_as_read(&self, id: &MessageId) -> bool {
    self.write().transition(id, MessageStatus::after_read)
  }

  /// `new | read -> replied`. Already replied or unknown id is a no-op.
  pub fn mark_as_replied(&self, id: &MessageId) -> bool {
    self.write().transition(id, MessageStatus::after_reply)
  }

  /// Remove the message permanently. Deleting an absent id is a no-op.
  pub fn delete_message(&self, id: &MessageId) -> bool {
    let mut state = self.write();
    let Some(idx) = state.position(id) else {
      tracing::debug!(%id, "delete of unknown message ignored");
      return false;
    };
    state.messages.remove(idx);
    state.refresh();
    tracing::info!(%id, "message deleted");
    true
  }

  pub fn set_search_term(&self, term: impl Into<String>) {
    let mut state = self.write();
    state.criteria.search_term = term.into();
    state.refresh();
    tracing::debug!(term = %state.criteria.search_term, "search term set");
  }

  pub fn set_status_filter(&self, filter: StatusFilter) {
    let mut state = self.write();
    state.criteria.status_filter = filter;
    state.refresh();
    tracing::debug!(?filter, "status filter set");
  }

  /// The detail-view action: return the message and mark it read if it was
  /// new. `None` for an unknown id.
  pub fn open_message(&self, id: &MessageId) -> Option<Message> {
    let mut state = self.write();
    state.transition(id, MessageStatus::after_read);
    state.position(id).map(|idx| state.messages[idx].clone())
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  /// The derived view, newest first.
  pub fn filtered_messages(&self) -> Vec<Message> { self.read().filtered.clone() }

  pub fn criteria(&self) -> FilterCriteria { self.read().criteria.clone() }

  /// Tallies over the filtered view, not the whole collection.
  pub fn counts(&self) -> MessageCounts { MessageCounts::tally(&self.read().filtered) }

  /// The unfiltered collection, newest first.
  pub fn all_messages(&self) -> Vec<Message> { self.read().messages.clone() }

  pub fn get(&self, id: &MessageId) -> Option<Message> {
    let state = self.read();
    state.position(id).map(|idx| state.messages[idx].clone())
  }

  /// Filtered messages, criteria and counts taken under one lock.
  pub fn snapshot(&self) -> TableView {
    let state = self.read();
    TableView {
      messages: state.filtered.clone(),
      criteria: state.criteria.clone(),
      counts:   MessageCounts::tally(&state.filtered),
    }
  }
}
