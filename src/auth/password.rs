//! # Password Hashing
//!
//! Thin wrapper over bcrypt: salted, computationally expensive hashing and
//! timing-safe verification.
//!
//! A mismatching password is a normal outcome (`Ok(false)`); only a hash
//! that cannot be parsed as a bcrypt encoding is an error.

use anyhow::{Context, Result};
use bcrypt::DEFAULT_COST;

/// Hashes a plaintext password with a fresh random salt.
///
/// # Example
/// ```
/// use ludoteca::auth::password::{hash_password, verify_password};
///
/// let hash = hash_password("hunter2").unwrap();
/// assert!(verify_password("hunter2", &hash).unwrap());
/// assert!(!verify_password("hunter3", &hash).unwrap());
/// ```
pub fn hash_password(plain: &str) -> Result<String> {
    bcrypt::hash(plain, DEFAULT_COST).context("failed to hash password")
}

/// Verifies a plaintext password against a stored bcrypt hash.
///
/// ## Errors
/// Returns an error only when `hash` is not a valid bcrypt encoding.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(plain, hash).context("stored password hash is not a valid bcrypt encoding")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = hash_password("correct horse").unwrap();

        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("wrong horse", &hash).unwrap());
    }

    #[test]
    fn hashing_salts_each_call() {
        let a = hash_password("same input").unwrap();
        let b = hash_password("same input").unwrap();

        assert_ne!(a, b, "two hashes of one password must differ by salt");
        assert!(verify_password("same input", &a).unwrap());
        assert!(verify_password("same input", &b).unwrap());
    }

    #[test]
    fn invalid_hash_encoding_is_a_hard_error() {
        let result = verify_password("whatever", "not-a-bcrypt-hash");
        assert!(result.is_err());
    }

    #[test]
    fn mismatch_is_not_an_error() {
        let hash = hash_password("p1").unwrap();
        let result = verify_password("p2", &hash);

        assert!(matches!(result, Ok(false)));
    }
}
