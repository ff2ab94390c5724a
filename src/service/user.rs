//! # User Administration Service
//!
//! The admin-only user surface: list, inspect, create, update, delete.
//! Self-service registration lives in the authentication service; this one
//! can also mint admins, which is why its routes are role-gated.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::error::entity::NotFoundError;
use crate::model::{Role, User};
use crate::service::CatalogError;
use crate::store::port::UserStore;

/// Attributes of a user as supplied by an administrator.
#[derive(Debug, Clone)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub role: Role,
}

pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub fn list(&self) -> Result<Vec<User>, CatalogError> {
        Ok(self.users.list()?)
    }

    pub fn get(&self, id: Uuid) -> Result<User, CatalogError> {
        self.users
            .find_by_id(&id)?
            .ok_or_else(|| NotFoundError::new("user").into())
    }

    /// Creates an account with an explicit role and password.
    pub fn create(&self, input: UserInput, password: &str) -> Result<User, CatalogError> {
        let input = validate(input)?;
        if password.is_empty() {
            return Err(CatalogError::Validation("password is required".into()));
        }
        self.ensure_email_free(&input.email, None)?;

        let user = self.users.save(User {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            password_hash: hash_password(password)?,
            role: input.role,
        })?;
        info!(user_id = %user.id, role = user.role.as_str(), "user created");

        Ok(user)
    }

    /// Updates name, email, and role. The password is untouched.
    pub fn update(&self, id: Uuid, input: UserInput) -> Result<User, CatalogError> {
        let mut user = self.get(id)?;
        let input = validate(input)?;

        if input.email != user.email {
            self.ensure_email_free(&input.email, Some(id))?;
        }

        user.name = input.name;
        user.email = input.email;
        user.role = input.role;
        Ok(self.users.update(user)?)
    }

    pub fn delete(&self, id: Uuid) -> Result<(), CatalogError> {
        if !self.users.delete(&id)? {
            return Err(NotFoundError::new("user").into());
        }
        info!(user_id = %id, "user deleted");
        Ok(())
    }

    fn ensure_email_free(&self, email: &str, except: Option<Uuid>) -> Result<(), CatalogError> {
        if let Some(existing) = self.users.find_by_email(email)? {
            if Some(existing.id) != except {
                return Err(CatalogError::Duplicate {
                    entity: "user",
                    value: email.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn validate(mut input: UserInput) -> Result<UserInput, CatalogError> {
    input.name = input.name.trim().to_string();
    input.email = input.email.trim().to_string();

    if input.name.is_empty() {
        return Err(CatalogError::Validation("name is required".into()));
    }
    if input.email.is_empty() || !input.email.contains('@') {
        return Err(CatalogError::Validation("a valid email is required".into()));
    }
    Ok(input)
}
