// order_service/src/services/auth_service.rs

//! Password hashing and verification.

use crate::errors::AppError;
use argon2::{
  password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
  Argon2,
};
use tracing::{debug, error, instrument};

/// Hashes a plain-text password with Argon2 and a fresh random salt.
///
/// Returns the PHC string (algorithm, parameters, salt and hash), which is what
/// gets stored in `users.password_hash`.
#[instrument(name = "auth_service::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String, AppError> {
  if password.is_empty() {
    return Err(AppError::Validation("Password cannot be empty.".to_string()));
  }

  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|argon_err| {
      error!(error = %argon_err, "Argon2 password hashing failed.");
      AppError::Internal(format!("Password hashing process failed: {}", argon_err))
    })
}

/// Checks `provided_password` against a stored PHC hash.
///
/// A mismatch (or an empty password) is `Ok(false)`. An unparseable stored
/// hash is an internal error, not a failed login.
#[instrument(
  name = "auth_service::verify_password",
  skip(hashed_password_str, provided_password),
  err(Display)
)]
pub fn verify_password(hashed_password_str: &str, provided_password: &str) -> Result<bool, AppError> {
  if provided_password.is_empty() {
    debug!("Empty password provided for verification.");
    return Ok(false);
  }

  let parsed_hash = PasswordHash::new(hashed_password_str).map_err(|parse_err| {
    error!(error = %parse_err, "Failed to parse stored password hash string.");
    AppError::Internal(format!("Invalid stored password hash format: {}", parse_err))
  })?;

  match Argon2::default().verify_password(provided_password.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => {
      debug!("Password verification failed: Passwords do not match.");
      Ok(false)
    }
    Err(other_argon_err) => {
      error!(error = %other_argon_err, "Argon2 password verification process encountered an error.");
      Err(AppError::Internal(format!(
        "Password verification process failed: {}",
        other_argon_err
      )))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn hash_then_verify() {
    let hash = hash_password("pw1").unwrap();
    assert!(hash.starts_with("$argon2"));
    assert!(verify_password(&hash, "pw1").unwrap());
    assert!(!verify_password(&hash, "pw2").unwrap());
    assert!(!verify_password(&hash, "").unwrap());
  }

  #[test]
  fn hashes_are_salted() {
    assert_ne!(hash_password("same").unwrap(), hash_password("same").unwrap());
  }

  #[test]
  fn empty_password_is_rejected() {
    assert!(matches!(hash_password(""), Err(AppError::Validation(_))));
  }

  #[test]
  fn corrupt_stored_hash_is_internal() {
    assert!(matches!(verify_password("not-a-phc-string", "pw"), Err(AppError::Internal(_))));
  }
}
