//! Opportunity messages: the records the admin dashboard triages.
//!
//! A message moves through a small forward-only lifecycle:
//! `new -> read -> replied`, or directly `new -> replied`. Nothing ever moves
//! a message backwards, and deletion removes it outright.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

// ─── Identity ────────────────────────────────────────────────────────────────

/// Opaque, store-assigned message identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
  /// A fresh random identifier.
  pub fn generate() -> Self { Self(Uuid::new_v4().to_string()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for MessageId {
  fn from(s: &str) -> Self { Self(s.to_owned()) }
}

impl From<String> for MessageId {
  fn from(s: String) -> Self { Self(s) }
}

impl fmt::Display for MessageId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Status ──────────────────────────────────────────────────────────────────

/// Where a message sits in the triage workflow.
///
/// Renders as exactly `new`, `read` or `replied`.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MessageStatus {
  New,
  Read,
  Replied,
}

impl MessageStatus {
  /// The status after a read action. Only `new` advances.
  pub fn after_read(self) -> Self {
    match self {
      Self::New => Self::Read,
      other => other,
    }
  }

  /// The status after a reply action. `replied` is terminal.
  pub fn after_reply(self) -> Self { Self::Replied }
}

// ─── Message ─────────────────────────────────────────────────────────────────

/// One inbound opportunity submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
  pub id:         MessageId,
  pub name:       String,
  pub email:      String,
  pub company:    String,
  pub position:   String,
  pub message:    String,
  /// Store-assigned; never changes after creation.
  pub created_at: DateTime<Utc>,
  pub status:     MessageStatus,
}

impl Message {
  /// Whether `needle` (already lowercased) occurs in the name, email,
  /// company or position. The message body is not searched.
  pub fn matches_search(&self, needle: &str) -> bool {
    [&self.name, &self.email, &self.company, &self.position]
      .iter()
      .any(|field| field.to_lowercase().contains(needle))
  }
}

// ─── NewMessage ──────────────────────────────────────────────────────────────

/// Input to `MessageStore::add_message`.
/// `id`, `created_at` and `status` are always set by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
  pub name:     String,
  pub email:    String,
  pub company:  String,
  pub position: String,
  pub message:  String,
}

impl NewMessage {
  /// Stamp the input with an id, a creation time and the `new` status.
  pub fn into_message(self, id: MessageId, created_at: DateTime<Utc>) -> Message {
    Message {
      id,
      name: self.name,
      email: self.email,
      company: self.company,
      position: self.position,
      message: self.message,
      created_at,
      status: MessageStatus::New,
    }
  }
}

#[cfg(test)]
mod tests {
  use std::str::FromStr as _;

  use super::*;

  #[test]
  fn read_only_advances_new() {
    assert_eq!(MessageStatus::New.after_read(), MessageStatus::Read);
    assert_eq!(MessageStatus::Read.after_read(), MessageStatus::Read);
    assert_eq!(MessageStatus::Replied.after_read(), MessageStatus::Replied);
  }

  #[test]
  fn reply_is_terminal_from_any_status() {
    for status in [MessageStatus::New, MessageStatus::Read, MessageStatus::Replied] {
      assert_eq!(status.after_reply(), MessageStatus::Replied);
    }
  }

  #[test]
  fn status_renders_lowercase() {
    assert_eq!(MessageStatus::New.to_string(), "new");
    assert_eq!(MessageStatus::Replied.to_string(), "replied");
    assert_eq!(
      serde_json::to_string(&MessageStatus::Read).unwrap(),
      "\"read\""
    );
    assert_eq!(MessageStatus::from_str("read").unwrap(), MessageStatus::Read);
    assert!(MessageStatus::from_str("Read").is_err());
  }

  #[test]
  fn search_skips_message_body() {
    let msg = NewMessage {
      name:     "Sarah Johnson".into(),
      email:    "sarah@techcorp.com".into(),
      company:  "TechCorp Solutions".into(),
      position: "Senior Developer".into(),
      message:  "We love kubernetes".into(),
    }
    .into_message(MessageId::from("1"), Utc::now());

    assert!(msg.matches_search("techcorp"));
    assert!(msg.matches_search("senior"));
    assert!(!msg.matches_search("kubernetes"));
  }
}
