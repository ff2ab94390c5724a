//! # Authentication Configuration
//!
//! Configuration for token signing and lifetime:
//! - `AUTH_SECRET` — base string used to derive the 32-byte signing key.
//!   When missing, a random key is generated for the lifetime of the
//!   process (tokens do not survive a restart in that mode).
//! - `AUTH_TOKEN_TTL_HOURS` — token time-to-live in hours (default: `24`).
//!
//! The signing key is loaded once at startup and never rotated at runtime.
//!
//! # Examples
//! ```rust
//! use ludoteca::config::auth::AuthConfig;
//!
//! let cfg = AuthConfig::from_env_with(|_| None);
//! assert_eq!(cfg.secret.len(), 32);
//! assert_eq!(cfg.token_ttl_hours, 24);
//! ```

use std::env as std_env;

use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::config::env::read_parsed_from;

/// Default token lifetime in hours.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Token signing configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    /// Symmetric signing key (HMAC-SHA256 via the JWT layer).
    pub secret: [u8; 32],
    /// Token lifetime in hours.
    pub token_ttl_hours: i64,
}

impl AuthConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_env_with(|k| std_env::var(k).ok())
    }

    /// Loads configuration using a custom key provider (for testing/mocking).
    pub fn from_env_with<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = match get("AUTH_SECRET") {
            Some(s) => derive_secret_from_string(&s),
            None => random_secret(),
        };

        let token_ttl_hours = read_parsed_from(&get, "AUTH_TOKEN_TTL_HOURS", DEFAULT_TOKEN_TTL_HOURS);

        Self {
            secret,
            token_ttl_hours,
        }
    }
}

/// Derives a deterministic 32-byte key from a configuration string.
pub fn derive_secret_from_string(s: &str) -> [u8; 32] {
    let digest = Sha256::digest(s.as_bytes());
    let mut key = [0u8; 32];
    key.copy_from_slice(&digest[..32]);
    key
}

/// Generates a new random 32-byte key.
pub fn random_secret() -> [u8; 32] {
    let mut key = [0u8; 32];
    rand::rng().fill_bytes(&mut key);
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn from_env_with_uses_defaults_when_missing() {
        let cfg = AuthConfig::from_env_with(|_| None);

        assert_eq!(cfg.secret.len(), 32);
        assert_eq!(cfg.token_ttl_hours, DEFAULT_TOKEN_TTL_HOURS);
    }

    #[test]
    fn from_env_with_respects_secret_and_ttl() {
        let mut fake = HashMap::<String, String>::new();
        fake.insert("AUTH_SECRET".into(), "my-top-secret".into());
        fake.insert("AUTH_TOKEN_TTL_HOURS".into(), "48".into());

        let cfg = AuthConfig::from_env_with(|k| fake.get(k).cloned());

        assert_eq!(cfg.secret, derive_secret_from_string("my-top-secret"));
        assert_eq!(cfg.token_ttl_hours, 48);
    }

    #[test]
    fn random_secret_varies_across_calls() {
        let a = AuthConfig::from_env_with(|_| None);
        let b = AuthConfig::from_env_with(|_| None);

        assert_ne!(a.secret, b.secret);
    }

    #[test]
    fn derive_secret_is_stable() {
        assert_eq!(
            derive_secret_from_string("abc"),
            derive_secret_from_string("abc")
        );
        assert_ne!(
            derive_secret_from_string("abc"),
            derive_secret_from_string("xyz")
        );
    }

    #[test]
    fn invalid_ttl_falls_back_to_default() {
        let cfg = AuthConfig::from_env_with(|k| {
            (k == "AUTH_TOKEN_TTL_HOURS").then(|| "soon".to_string())
        });

        assert_eq!(cfg.token_ttl_hours, DEFAULT_TOKEN_TTL_HOURS);
    }
}
