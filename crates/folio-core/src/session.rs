//! Session: the authenticated/unauthenticated state of the single admin.

use serde::{Deserialize, Serialize};

/// The identity attached to an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub email: String,
}

/// Authentication state. `is_authenticated()` holds exactly when `user()` is
/// `Some`; the fields are private so the two cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SessionRepr", into = "SessionRepr")]
pub struct Session {
  user: Option<User>,
}

impl Session {
  pub fn anonymous() -> Self { Self { user: None } }

  pub fn authenticated(user: User) -> Self { Self { user: Some(user) } }

  pub fn is_authenticated(&self) -> bool { self.user.is_some() }

  pub fn user(&self) -> Option<&User> { self.user.as_ref() }
}

/// Wire/persisted shape: `{"is_authenticated": bool, "user": {..} | null}`.
#[derive(Serialize, Deserialize)]
struct SessionRepr {
  #[serde(default)]
  is_authenticated: bool,
  #[serde(default)]
  user:             Option<User>,
}

impl From<SessionRepr> for Session {
  fn from(raw: SessionRepr) -> Self {
    match raw.user {
      Some(user) if raw.is_authenticated => Self::authenticated(user),
      _ => Self::anonymous(),
    }
  }
}

impl From<Session> for SessionRepr {
  fn from(session: Session) -> Self {
    Self { is_authenticated: session.is_authenticated(), user: session.user }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn serialises_flag_alongside_user() {
    let session = Session::authenticated(User { email: "a@b.co".into() });
    assert_eq!(
      serde_json::to_value(&session).unwrap(),
      json!({ "is_authenticated": true, "user": { "email": "a@b.co" } })
    );
    assert_eq!(
      serde_json::to_value(Session::anonymous()).unwrap(),
      json!({ "is_authenticated": false, "user": null })
    );
  }

  #[test]
  fn inconsistent_persisted_state_loads_as_anonymous() {
    let flag_without_user: Session =
      serde_json::from_value(json!({ "is_authenticated": true, "user": null }))
        .unwrap();
    assert!(!flag_without_user.is_authenticated());

    let user_without_flag: Session = serde_json::from_value(
      json!({ "is_authenticated": false, "user": { "email": "a@b.co" } }),
    )
    .unwrap();
    assert!(user_without_flag.user().is_none());
  }
}
