//! Submission contracts for the login and recruiter forms.
//!
//! These checks run at the boundary, before any store is called. The stores
//! themselves trust their input.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, message::NewMessage};

// ─── Field errors ────────────────────────────────────────────────────────────

/// Every failing field mapped to a human-readable message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn get(&self, field: &str) -> Option<&str> {
    self.0.get(field).map(String::as_str)
  }

  fn push(&mut self, field: &'static str, message: impl Into<String>) {
    self.0.entry(field).or_insert_with(|| message.into());
  }

  fn into_result(self) -> Result<()> {
    if self.is_empty() { Ok(()) } else { Err(Error::Validation(self)) }
  }
}

impl fmt::Display for FieldErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for (field, message) in &self.0 {
      if !first {
        f.write_str("; ")?;
      }
      write!(f, "{field}: {message}")?;
      first = false;
    }
    Ok(())
  }
}

// ─── Rules ───────────────────────────────────────────────────────────────────

fn require_min(
  errors: &mut FieldErrors,
  field: &'static str,
  label: &str,
  value: &str,
  min: usize,
) {
  if value.is_empty() {
    errors.push(field, format!("{label} is required"));
  } else if value.chars().count() < min {
    errors.push(field, format!("{label} must be at least {min} characters"));
  }
}

fn require_email(errors: &mut FieldErrors, value: &str) {
  if value.is_empty() {
    errors.push("email", "Email is required");
  } else if !is_valid_email(value) {
    errors.push("email", "Invalid email address");
  }
}

/// Syntactic check: one `@`, a non-empty local part, a dotted domain with no
/// empty labels, and no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
  if value.chars().any(char::is_whitespace) {
    return false;
  }
  let Some((local, domain)) = value.split_once('@') else {
    return false;
  };
  !local.is_empty()
    && !domain.contains('@')
    && domain.contains('.')
    && domain.split('.').all(|label| !label.is_empty())
}

// ─── Login form ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
  #[serde(default)]
  pub email:    String,
  #[serde(default)]
  pub password: String,
}

impl LoginForm {
  pub const MIN_PASSWORD: usize = 6;

  pub fn validate(&self) -> Result<()> {
    let mut errors = FieldErrors::default();
    require_email(&mut errors, self.email.trim());
    require_min(&mut errors, "password", "Password", &self.password, Self::MIN_PASSWORD);
    errors.into_result()
  }
}

// ─── Recruiter form ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct RecruiterForm {
  #[serde(default)]
  pub name:     String,
  #[serde(default)]
  pub email:    String,
  #[serde(default)]
  pub company:  String,
  #[serde(default)]
  pub position: String,
  #[serde(default)]
  pub message:  String,
}

impl RecruiterForm {
  /// Validate and convert into store input. Values are trimmed first.
  pub fn validate(self) -> Result<NewMessage> {
    let candidate = NewMessage {
      name:     self.name.trim().to_owned(),
      email:    self.email.trim().to_owned(),
      company:  self.company.trim().to_owned(),
      position: self.position.trim().to_owned(),
      message:  self.message.trim().to_owned(),
    };

    let mut errors = FieldErrors::default();
    require_min(&mut errors, "name", "Name", &candidate.name, 2);
    require_email(&mut errors, &candidate.email);
    require_min(&mut errors, "company", "Company name", &candidate.company, 2);
    require_min(&mut errors, "position", "Position", &candidate.position, 2);
    require_min(&mut errors, "message", "Message", &candidate.message, 10);
    errors.into_result()?;

    Ok(candidate)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn recruiter() -> RecruiterForm {
    RecruiterForm {
      name:     "Sarah Johnson".into(),
      email:    "sarah.johnson@techcorp.com".into(),
      company:  "TechCorp Solutions".into(),
      position: "Senior Full Stack Developer".into(),
      message:  "We are looking for a talented developer.".into(),
    }
  }

  fn field_errors(result: Result<impl fmt::Debug>) -> FieldErrors {
    match result {
      Err(Error::Validation(errors)) => errors,
      other => panic!("expected validation failure, got {other:?}"),
    }
  }

  #[test]
  fn email_syntax() {
    assert!(is_valid_email("admin@portfolio.com"));
    assert!(is_valid_email("emily.r@big.tech.io"));
    assert!(!is_valid_email("admin"));
    assert!(!is_valid_email("@portfolio.com"));
    assert!(!is_valid_email("admin@portfolio"));
    assert!(!is_valid_email("admin@@portfolio.com"));
    assert!(!is_valid_email("admin@portfolio..com"));
    assert!(!is_valid_email("ad min@portfolio.com"));
  }

  #[test]
  fn login_accepts_reference_shape() {
    let form = LoginForm {
      email:    "admin@portfolio.com".into(),
      password: "admin123".into(),
    };
    assert!(form.validate().is_ok());
  }

  #[test]
  fn login_reports_every_failing_field() {
    let form = LoginForm { email: "nope".into(), password: "12345".into() };
    let errors = field_errors(form.validate());
    assert_eq!(errors.get("email"), Some("Invalid email address"));
    assert_eq!(
      errors.get("password"),
      Some("Password must be at least 6 characters")
    );
  }

  #[test]
  fn recruiter_form_trims_and_converts() {
    let mut form = recruiter();
    form.name = "  Sarah Johnson  ".into();
    let new = form.validate().unwrap();
    assert_eq!(new.name, "Sarah Johnson");
    assert_eq!(new.company, "TechCorp Solutions");
  }

  #[test]
  fn recruiter_form_minimum_lengths() {
    let mut form = recruiter();
    form.name = "S".into();
    form.company = String::new();
    form.message = "too short".into();
    let errors = field_errors(form.validate());
    assert_eq!(errors.get("name"), Some("Name must be at least 2 characters"));
    assert_eq!(errors.get("company"), Some("Company name is required"));
    assert_eq!(
      errors.get("message"),
      Some("Message must be at least 10 characters")
    );
    assert_eq!(errors.get("position"), None);
  }

  #[test]
  fn whitespace_only_counts_as_missing() {
    let mut form = recruiter();
    form.position = "   ".into();
    let errors = field_errors(form.validate());
    assert_eq!(errors.get("position"), Some("Position is required"));
  }
}
