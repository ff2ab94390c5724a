//! # Token Codec (JWT)
//!
//! Issues and validates the signed, time-bounded identity tokens that back
//! stateless authentication.
//!
//! ## Design principles
//! - No dependency on `std::env` and no global state: the signing key and
//!   lifetime come from [`AuthConfig`](crate::config::auth::AuthConfig).
//! - No dependency on system time: `issue` and `validate` take the
//!   reference instant from the caller, so validation is a pure function of
//!   (token, now, secret) and tests are deterministic.
//!
//! ## Scheme
//! JWT with HS256 over a 32-byte symmetric key; claims are
//! `{sub, role, iat, exp}` with `exp = iat + TTL` (default 24 h).
//!
//! Validation failures are classified as [`TokenError::Malformed`],
//! [`TokenError::BadSignature`] or [`TokenError::Expired`]. Callers at the
//! HTTP boundary must not forward this distinction to clients; the filter
//! collapses all three into one generic unauthenticated outcome.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::auth::AuthConfig;
use crate::model::{Role, User};

/// Claims stored inside the token payload.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: String,
    /// Role captured at issuance.
    pub role: Role,
    /// Issued-at (UTC, seconds since UNIX epoch).
    pub iat: i64,
    /// Expiration (UTC, seconds since UNIX epoch).
    pub exp: i64,
}

/// Why a token was rejected.
///
/// Distinguishable internally (and in logs) but intentionally collapsed
/// before any response leaves the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The wire format could not be parsed into a token at all.
    #[error("token is not parseable")]
    Malformed,
    /// Parseable, but the signature does not match the signing key.
    #[error("token signature mismatch")]
    BadSignature,
    /// Correctly signed, but past its expiration instant.
    #[error("token has expired")]
    Expired,
}

/// Issues and validates signed identity tokens.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenCodec {
    /// Creates a codec from a raw signing key and a lifetime in hours.
    pub fn new(secret: &[u8], ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Creates a codec from the application configuration.
    pub fn from_config(cfg: &AuthConfig) -> Self {
        Self::new(&cfg.secret, cfg.token_ttl_hours)
    }

    /// Creates a signed token for `user`, valid from `now` until
    /// `now + TTL`.
    ///
    /// Issuing a token for the same subject at two different instants
    /// yields different tokens, because `iat`/`exp` differ.
    pub fn issue(&self, user: &User, now: DateTime<Utc>) -> anyhow::Result<String> {
        let claims = Claims {
            sub: user.id.to_string(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding)?;
        Ok(token)
    }

    /// Validates a token against the signing key and the supplied instant.
    ///
    /// ## Errors
    /// - [`TokenError::Malformed`] when the wire format cannot be parsed
    /// - [`TokenError::BadSignature`] when the recomputed signature differs
    /// - [`TokenError::Expired`] when `now >= exp`
    pub fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below against the caller's instant, not the
        // library's view of system time.
        validation.validate_exp = false;

        let decoded = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                _ => TokenError::Malformed,
            }
        })?;

        let claims = decoded.claims;
        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    const SECRET: &[u8] = b"unit-test-secret-unit-test-secret";

    fn codec() -> TokenCodec {
        TokenCodec::new(SECRET, 24)
    }

    fn test_user(role: Role) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password_hash: "hash".into(),
            role,
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 9, 12, 0, 0).unwrap()
    }

    #[test]
    fn issue_and_validate_roundtrip() {
        let codec = codec();
        let user = test_user(Role::Admin);

        let token = codec.issue(&user, t0()).unwrap();
        let claims = codec.validate(&token, t0() + Duration::seconds(1)).unwrap();

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.iat, t0().timestamp());
        assert_eq!(claims.exp, (t0() + Duration::hours(24)).timestamp());
    }

    #[test]
    fn token_expires_after_ttl() {
        let codec = codec();
        let token = codec.issue(&test_user(Role::User), t0()).unwrap();

        let just_before = t0() + Duration::hours(24) - Duration::seconds(1);
        assert!(codec.validate(&token, just_before).is_ok());

        let just_after = t0() + Duration::hours(24) + Duration::seconds(1);
        assert_eq!(
            codec.validate(&token, just_after),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let codec = codec();
        let token = codec.issue(&test_user(Role::User), t0()).unwrap();

        // now == exp is already expired
        let at_exp = t0() + Duration::hours(24);
        assert_eq!(codec.validate(&token, at_exp), Err(TokenError::Expired));
    }

    #[test]
    fn wrong_secret_is_a_signature_failure() {
        let codec = codec();
        let other = TokenCodec::new(b"another-secret-another-secret!!!", 24);

        let token = codec.issue(&test_user(Role::User), t0()).unwrap();
        assert_eq!(
            other.validate(&token, t0()),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn tampering_with_any_part_invalidates_the_token() {
        let codec = codec();
        let token = codec.issue(&test_user(Role::User), t0()).unwrap();

        // Flip the leading character of each of the three JWT segments.
        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);

        for i in 0..3 {
            let mut segment = parts[i].to_string();
            let replacement = if segment.starts_with('A') { "B" } else { "A" };
            segment.replace_range(..1, replacement);

            let mut tampered_parts = parts.clone();
            tampered_parts[i] = &segment;
            let tampered = tampered_parts.join(".");

            assert!(
                codec.validate(&tampered, t0()).is_err(),
                "tampered segment {i} was accepted"
            );
        }
    }

    #[test]
    fn garbage_is_malformed() {
        let codec = codec();

        assert_eq!(
            codec.validate("not-a-token", t0()),
            Err(TokenError::Malformed)
        );
        assert_eq!(
            codec.validate("a.b.c", t0()),
            Err(TokenError::Malformed)
        );
        assert_eq!(codec.validate("", t0()), Err(TokenError::Malformed));
    }

    #[test]
    fn issuance_at_different_instants_yields_different_tokens() {
        let codec = codec();
        let user = test_user(Role::User);

        let a = codec.issue(&user, t0()).unwrap();
        let b = codec.issue(&user, t0() + Duration::seconds(1)).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn validation_is_deterministic_in_now() {
        let codec = codec();
        let token = codec.issue(&test_user(Role::User), t0()).unwrap();

        let instant = t0() + Duration::hours(12);
        assert_eq!(
            codec.validate(&token, instant),
            codec.validate(&token, instant)
        );
    }
}
