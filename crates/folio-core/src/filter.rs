//! Search/status criteria and the pure projection that derives the filtered
//! view from the full message collection.
//!
//! The view is never patched incrementally: every mutation re-runs
//! [`project`] over the whole collection.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
  Error,
  message::{Message, MessageStatus},
};

// ─── Status filter ───────────────────────────────────────────────────────────

/// Restricts the view to a single status, or lets everything through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
  #[default]
  All,
  New,
  Read,
  Replied,
}

impl StatusFilter {
  pub fn admits(self, status: MessageStatus) -> bool {
    match self {
      Self::All => true,
      Self::New => status == MessageStatus::New,
      Self::Read => status == MessageStatus::Read,
      Self::Replied => status == MessageStatus::Replied,
    }
  }
}

impl From<MessageStatus> for StatusFilter {
  fn from(status: MessageStatus) -> Self {
    match status {
      MessageStatus::New => Self::New,
      MessageStatus::Read => Self::Read,
      MessageStatus::Replied => Self::Replied,
    }
  }
}

impl FromStr for StatusFilter {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "all" => Ok(Self::All),
      other => MessageStatus::from_str(other)
        .map(Self::from)
        .map_err(|_| Error::UnknownStatus(other.to_owned())),
    }
  }
}

// ─── Criteria ────────────────────────────────────────────────────────────────

/// The current search term and status filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
  /// Case-insensitive substring matched against name, email, company and
  /// position. Empty means no search restriction.
  pub search_term:   String,
  pub status_filter: StatusFilter,
}

/// Derive the filtered view of `messages` under `criteria`.
///
/// Order is preserved (the collection is newest-first). The search term and
/// the status filter compose with logical AND.
pub fn project(messages: &[Message], criteria: &FilterCriteria) -> Vec<Message> {
  let needle = criteria.search_term.to_lowercase();
  messages
    .iter()
    .filter(|m| needle.is_empty() || m.matches_search(&needle))
    .filter(|m| criteria.status_filter.admits(m.status))
    .cloned()
    .collect()
}

// ─── Derived counts ──────────────────────────────────────────────────────────

/// Per-status tallies over a (usually filtered) slice of messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCounts {
  pub total:   usize,
  pub new:     usize,
  pub read:    usize,
  pub replied: usize,
}

impl MessageCounts {
  pub fn tally(messages: &[Message]) -> Self {
    messages.iter().fold(
      Self { total: messages.len(), ..Self::default() },
      |mut acc, m| {
        match m.status {
          MessageStatus::New => acc.new += 1,
          MessageStatus::Read => acc.read += 1,
          MessageStatus::Replied => acc.replied += 1,
        }
        acc
      },
    )
  }
}

// ─── Table view ──────────────────────────────────────────────────────────────

/// Everything the message table renders, read as one consistent snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
  /// Newest first.
  pub messages: Vec<Message>,
  pub criteria: FilterCriteria,
  /// Computed over `messages`, not over the unfiltered collection.
  pub counts:   MessageCounts,
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Utc};

  use super::*;
  use crate::message::{MessageId, NewMessage};

  fn msg(id: &str, name: &str, company: &str, status: MessageStatus) -> Message {
    let mut m = NewMessage {
      name:     name.into(),
      email:    format!("{}@example.com", name.to_lowercase()),
      company:  company.into(),
      position: "Engineer".into(),
      message:  "An exciting opportunity awaits".into(),
    }
    .into_message(
      MessageId::from(id),
      Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
    );
    m.status = status;
    m
  }

  fn sample() -> Vec<Message> {
    vec![
      msg("4", "Dana", "TechCorp Solutions", MessageStatus::New),
      msg("3", "Carl", "StartupXYZ", MessageStatus::Read),
      msg("2", "Bea", "TechCorp Solutions", MessageStatus::Replied),
      msg("1", "Abe", "StartupXYZ", MessageStatus::New),
    ]
  }

  fn ids(view: &[Message]) -> Vec<&str> {
    view.iter().map(|m| m.id.as_str()).collect()
  }

  #[test]
  fn empty_criteria_returns_everything_in_order() {
    let all = sample();
    let view = project(&all, &FilterCriteria::default());
    assert_eq!(view, all);
  }

  #[test]
  fn search_is_case_insensitive() {
    let criteria = FilterCriteria {
      search_term:   "TECHcorp".into(),
      status_filter: StatusFilter::All,
    };
    assert_eq!(ids(&project(&sample(), &criteria)), vec!["4", "2"]);
  }

  #[test]
  fn search_and_status_compose_with_and() {
    let criteria = FilterCriteria {
      search_term:   "techcorp".into(),
      status_filter: StatusFilter::New,
    };
    assert_eq!(ids(&project(&sample(), &criteria)), vec!["4"]);
  }

  #[test]
  fn search_matches_email() {
    let criteria = FilterCriteria {
      search_term:   "carl@".into(),
      status_filter: StatusFilter::All,
    };
    assert_eq!(ids(&project(&sample(), &criteria)), vec!["3"]);
  }

  #[test]
  fn counts_follow_the_filtered_view() {
    let criteria = FilterCriteria {
      search_term:   String::new(),
      status_filter: StatusFilter::New,
    };
    let view = project(&sample(), &criteria);
    let counts = MessageCounts::tally(&view);
    assert_eq!(counts.total, 2);
    assert_eq!(counts.new, 2);
    assert_eq!(counts.replied, 0);
  }

  #[test]
  fn status_filter_parses_all_and_statuses() {
    assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
    assert_eq!("replied".parse::<StatusFilter>().unwrap(), StatusFilter::Replied);
    assert!(matches!(
      "archived".parse::<StatusFilter>(),
      Err(Error::UnknownStatus(s)) if s == "archived"
    ));
  }
}
