//! The fixed sample set every process starts with.

use chrono::{DateTime, Utc};
use folio_core::message::{Message, MessageId, MessageStatus};

fn at(rfc3339: &str) -> DateTime<Utc> {
  DateTime::parse_from_rfc3339(rfc3339)
    .map(|dt| dt.with_timezone(&Utc))
    .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn sample(
  id: &str,
  name: &str,
  email: &str,
  company: &str,
  position: &str,
  message: &str,
  created_at: &str,
  status: MessageStatus,
) -> Message {
  Message {
    id: MessageId::from(id),
    name: name.to_owned(),
    email: email.to_owned(),
    company: company.to_owned(),
    position: position.to_owned(),
    message: message.to_owned(),
    created_at: at(created_at),
    status,
  }
}

/// The four demo messages, newest first.
pub fn sample_messages() -> Vec<Message> {
  vec![
    sample(
      "1",
      "Sarah Johnson",
      "sarah.johnson@techcorp.com",
      "TechCorp Solutions",
      "Senior Full Stack Developer",
      "We are looking for a talented full-stack developer to join our growing \
       team. The role involves working with React, Node.js, and AWS. \
       Competitive salary and great benefits package.",
      "2024-01-15T10:30:00Z",
      MessageStatus::New,
    ),
    sample(
      "2",
      "Michael Chen",
      "michael.chen@startupxyz.com",
      "StartupXYZ",
      "Lead Frontend Developer",
      "Exciting opportunity at a fast-growing fintech startup. We need someone \
       with strong React and TypeScript skills. Equity package included.",
      "2024-01-14T14:20:00Z",
      MessageStatus::Read,
    ),
    sample(
      "3",
      "Emily Rodriguez",
      "emily.r@bigtech.com",
      "BigTech Inc",
      "Software Engineer III",
      "We have an opening for a software engineer on our platform team. \
       Remote-first company with excellent work-life balance. Looking for \
       someone with 5+ years experience.",
      "2024-01-13T09:15:00Z",
      MessageStatus::Replied,
    ),
    sample(
      "4",
      "David Kim",
      "david.kim@consultingfirm.com",
      "Elite Consulting",
      "Technical Consultant",
      "Contract opportunity for 6 months with potential for extension. Need \
       someone who can work with multiple clients on various tech stacks.",
      "2024-01-12T16:45:00Z",
      MessageStatus::New,
    ),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn samples_are_newest_first_with_real_timestamps() {
    let samples = sample_messages();
    assert_eq!(samples.len(), 4);
    assert!(samples.iter().all(|m| m.created_at > DateTime::<Utc>::default()));
    assert!(samples.windows(2).all(|w| w[0].created_at > w[1].created_at));
  }

  #[test]
  fn samples_carry_their_exact_timestamps() {
    use chrono::TimeZone;

    let stamps: Vec<(String, DateTime<Utc>)> = sample_messages()
      .into_iter()
      .map(|m| (m.id.to_string(), m.created_at))
      .collect();
    let expected = [
      ("1", Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()),
      ("2", Utc.with_ymd_and_hms(2024, 1, 14, 14, 20, 0).unwrap()),
      ("3", Utc.with_ymd_and_hms(2024, 1, 13, 9, 15, 0).unwrap()),
      ("4", Utc.with_ymd_and_hms(2024, 1, 12, 16, 45, 0).unwrap()),
    ]
    .map(|(id, at)| (id.to_owned(), at));
    assert_eq!(stamps, expected);
  }
}
