//! # Security Context
//!
//! The per-request result of authentication, threaded explicitly from the
//! request filter through the access decision into the handler (as a
//! request extension). There is exactly one context per request and it is
//! never shared across requests; nothing here is ambient or thread-bound.

use crate::model::{Role, User};

/// The authenticated principal for one request, or the absence of one.
///
/// `SecurityContext` represents the *result of authentication*, not an
/// authorization decision: whether the carried identity may do anything is
/// for the access matrix and the handlers to decide.
///
/// # Example
/// ```
/// use ludoteca::auth::principal::SecurityContext;
///
/// let ctx = SecurityContext::anonymous();
/// assert!(!ctx.is_authenticated());
/// assert!(ctx.user().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecurityContext {
    user: Option<User>,
}

impl SecurityContext {
    /// A context with no identity: no token, or a token that failed
    /// validation (the two are deliberately indistinguishable here).
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// A context carrying a freshly re-fetched identity.
    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The resolved identity, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The role of the resolved identity, if any.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user(role: Role) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password_hash: "hash".into(),
            role,
        }
    }

    #[test]
    fn anonymous_context_has_no_identity() {
        let ctx = SecurityContext::anonymous();

        assert!(!ctx.is_authenticated());
        assert!(ctx.user().is_none());
        assert!(ctx.role().is_none());
    }

    #[test]
    fn authenticated_context_exposes_identity_and_role() {
        let u = user(Role::Admin);
        let ctx = SecurityContext::authenticated(u.clone());

        assert!(ctx.is_authenticated());
        assert_eq!(ctx.user(), Some(&u));
        assert_eq!(ctx.role(), Some(Role::Admin));
    }

    #[test]
    fn context_is_cloneable_per_request() {
        let ctx = SecurityContext::authenticated(user(Role::User));
        let cloned = ctx.clone();

        assert_eq!(ctx, cloned);
    }
}
