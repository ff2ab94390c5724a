//! # Authentication Service
//!
//! Orchestrates credential checks and token issuance over the user store
//! port. Login deliberately reports one single error for "unknown email"
//! and "wrong password" so the endpoint cannot be used as an account
//! existence oracle.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::TokenCodec;
use crate::model::{Role, User};
use crate::store::port::UserStore;
use crate::time::Clock;

/// Failures of login and registration.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password; indistinguishable on purpose.
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("an account with this email already exists")]
    DuplicateEmail,
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Login and registration over the user store.
pub struct AuthService {
    users: Arc<dyn UserStore>,
    codec: Arc<TokenCodec>,
    clock: Arc<dyn Clock>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, codec: Arc<TokenCodec>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            codec,
            clock,
        }
    }

    /// Authenticates a user and issues a token bound to their id and role.
    pub fn login(&self, email: &str, password: &str) -> Result<(User, String), AuthError> {
        let Some(user) = self.users.find_by_email(email)? else {
            warn!(email, "login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash)? {
            warn!(email, "login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.codec.issue(&user, self.clock.now())?;
        info!(user_id = %user.id, role = user.role.as_str(), "login succeeded");

        Ok((user, token))
    }

    /// Registers a new account.
    ///
    /// The role is always [`Role::User`]; privilege escalation at
    /// registration is not possible regardless of the request contents.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        if self.users.exists_by_email(email)? {
            return Err(AuthError::DuplicateEmail);
        }

        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password)?,
            role: Role::User,
        };

        let saved = self.users.save(user)?;
        info!(user_id = %saved.id, "account registered");

        Ok(saved)
    }
}
