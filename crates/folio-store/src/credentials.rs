//! The reference credential pair and its argon2-backed check.

use argon2::{
  Argon2,
  PasswordHash,
  PasswordHasher,
  PasswordVerifier,
  password_hash::SaltString,
};
use rand_core::OsRng;

use crate::{Error, Result};

/// The single admin identity accepted by [`crate::SessionStore::login`].
#[derive(Clone)]
pub struct Credentials {
  email:         String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  password_hash: String,
}

impl Credentials {
  pub const REFERENCE_EMAIL: &'static str = "admin@portfolio.com";
  pub const REFERENCE_PASSWORD: &'static str = "admin123";

  /// Build from an email and an already-hashed password. The hash must parse
  /// as a PHC string.
  pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Result<Self> {
    let password_hash = password_hash.into();
    PasswordHash::new(&password_hash)
      .map_err(|e| Error::Credential(format!("invalid password hash: {e}")))?;
    Ok(Self { email: email.into(), password_hash })
  }

  /// Build from a plaintext password, hashing it with a fresh salt.
  pub fn from_plaintext(email: impl Into<String>, password: &str) -> Result<Self> {
    Ok(Self { email: email.into(), password_hash: hash_password(password)? })
  }

  /// `admin@portfolio.com` / `admin123`.
  pub fn reference() -> Result<Self> {
    Self::from_plaintext(Self::REFERENCE_EMAIL, Self::REFERENCE_PASSWORD)
  }

  pub fn email(&self) -> &str { &self.email }

  /// Exact email match plus argon2 password verification. Never reveals which
  /// half failed.
  pub fn verify(&self, email: &str, password: &str) -> bool {
    if email != self.email {
      return false;
    }
    let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
      return false;
    };
    Argon2::default()
      .verify_password(password.as_bytes(), &parsed)
      .is_ok()
  }
}

impl std::fmt::Debug for Credentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credentials")
      .field("email", &self.email)
      .finish_non_exhaustive()
  }
}

/// Produce an argon2 PHC string for `password`.
pub fn hash_password(password: &str) -> Result<String> {
  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|e| Error::Credential(format!("argon2 error: {e}")))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reference_pair_verifies() {
    let creds = Credentials::reference().unwrap();
    assert!(creds.verify("admin@portfolio.com", "admin123"));
  }

  #[test]
  fn mismatches_are_rejected() {
    let creds = Credentials::reference().unwrap();
    assert!(!creds.verify("admin@portfolio.com", "wrong"));
    assert!(!creds.verify("someone@portfolio.com", "admin123"));
    assert!(!creds.verify("ADMIN@portfolio.com", "admin123"));
  }

  #[test]
  fn configured_hash_must_parse() {
    assert!(matches!(
      Credentials::new("admin@portfolio.com", "not-a-phc-string"),
      Err(Error::Credential(_))
    ));
    let hash = hash_password("hunter22").unwrap();
    let creds = Credentials::new("me@example.com", hash).unwrap();
    assert!(creds.verify("me@example.com", "hunter22"));
  }

  #[test]
  fn debug_hides_the_hash() {
    let creds = Credentials::reference().unwrap();
    assert!(!format!("{creds:?}").contains("argon2"));
  }
}
