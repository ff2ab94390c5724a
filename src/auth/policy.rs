//! # Access Control Matrix
//!
//! The whole route/role policy as one declarative, immutable rule table,
//! built at process start and evaluated in order (first matching rule
//! wins). Keeping every rule here makes the authorization surface auditable
//! in one place instead of being scattered across handlers.
//!
//! Decision semantics:
//! - `Public` routes always pass.
//! - `AnyAuthenticated` requires a resolved identity.
//! - `RoleIn` additionally requires the identity's role to be in the set;
//!   an anonymous caller gets `Unauthenticated` (401), an authenticated one
//!   with the wrong role gets `Forbidden` (403). The two outcomes are
//!   observably different, unlike the collapsed token-failure causes.

use axum::http::Method;

use crate::auth::principal::SecurityContext;
use crate::model::Role;

/// What a rule demands of the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Public,
    AnyAuthenticated,
    RoleIn(&'static [Role]),
}

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// No valid identity on a route that needs one (reported as 401).
    Unauthenticated,
    /// Valid identity, insufficient role (reported as 403).
    Forbidden,
}

/// HTTP methods a rule applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Methods {
    Any,
    Of(&'static [Method]),
}

impl Methods {
    fn matches(&self, method: &Method) -> bool {
        match self {
            Methods::Any => true,
            Methods::Of(set) => set.contains(method),
        }
    }
}

/// One immutable entry of the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRule {
    methods: Methods,
    prefix: &'static str,
    requirement: Requirement,
}

impl AccessRule {
    fn matches(&self, method: &Method, path: &str) -> bool {
        self.methods.matches(method) && prefix_matches(self.prefix, path)
    }
}

/// Path prefix match on segment boundaries: `/videojuegos` matches
/// `/videojuegos` and `/videojuegos/42`, but not `/videojuegosx`.
fn prefix_matches(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

const MUTATING: &[Method] = &[Method::POST, Method::PUT, Method::DELETE];

/// The ordered rule table.
#[derive(Debug, Clone)]
pub struct AccessMatrix {
    rules: Vec<AccessRule>,
}

impl AccessMatrix {
    /// The catalogue policy:
    ///
    /// | Methods | Prefix | Requirement |
    /// |---|---|---|
    /// | POST | `/auth` | Public |
    /// | GET | `/videojuegos`, `/generos`, `/desarrolladores`, `/valoraciones` | Public |
    /// | POST | `/valoraciones` | AnyAuthenticated |
    /// | POST/PUT/DELETE | `/videojuegos`, `/generos`, `/desarrolladores` | Admin |
    /// | any | `/usuarios` | Admin |
    /// | any | anything else | AnyAuthenticated |
    pub fn catalogue_policy() -> Self {
        let mut rules = Vec::new();

        rules.push(AccessRule {
            methods: Methods::Of(&[Method::POST]),
            prefix: "/auth",
            requirement: Requirement::Public,
        });

        for prefix in ["/videojuegos", "/generos", "/desarrolladores", "/valoraciones"] {
            rules.push(AccessRule {
                methods: Methods::Of(&[Method::GET]),
                prefix,
                requirement: Requirement::Public,
            });
        }

        rules.push(AccessRule {
            methods: Methods::Of(&[Method::POST]),
            prefix: "/valoraciones",
            requirement: Requirement::AnyAuthenticated,
        });

        for prefix in ["/videojuegos", "/generos", "/desarrolladores"] {
            rules.push(AccessRule {
                methods: Methods::Of(MUTATING),
                prefix,
                requirement: Requirement::RoleIn(&[Role::Admin]),
            });
        }

        rules.push(AccessRule {
            methods: Methods::Any,
            prefix: "/usuarios",
            requirement: Requirement::RoleIn(&[Role::Admin]),
        });

        Self { rules }
    }

    /// Evaluates the table for one request. Unmatched requests fall back to
    /// `AnyAuthenticated`.
    pub fn decide(&self, method: &Method, path: &str, ctx: &SecurityContext) -> Decision {
        let requirement = self
            .rules
            .iter()
            .find(|rule| rule.matches(method, path))
            .map(|rule| &rule.requirement)
            .unwrap_or(&Requirement::AnyAuthenticated);

        match requirement {
            Requirement::Public => Decision::Allow,
            Requirement::AnyAuthenticated => {
                if ctx.is_authenticated() {
                    Decision::Allow
                } else {
                    Decision::Unauthenticated
                }
            }
            Requirement::RoleIn(allowed) => match ctx.role() {
                None => Decision::Unauthenticated,
                Some(role) if allowed.contains(&role) => Decision::Allow,
                Some(_) => Decision::Forbidden,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;
    use uuid::Uuid;

    fn ctx(role: Option<Role>) -> SecurityContext {
        match role {
            None => SecurityContext::anonymous(),
            Some(role) => SecurityContext::authenticated(User {
                id: Uuid::new_v4(),
                name: "Ana".into(),
                email: "ana@example.com".into(),
                password_hash: "hash".into(),
                role,
            }),
        }
    }

    fn matrix() -> AccessMatrix {
        AccessMatrix::catalogue_policy()
    }

    #[test]
    fn prefix_matching_respects_segment_boundaries() {
        assert!(prefix_matches("/videojuegos", "/videojuegos"));
        assert!(prefix_matches("/videojuegos", "/videojuegos/42"));
        assert!(!prefix_matches("/videojuegos", "/videojuegosx"));
        assert!(!prefix_matches("/videojuegos", "/generos"));
    }

    #[test]
    fn auth_endpoints_are_public_for_post() {
        let m = matrix();
        assert_eq!(
            m.decide(&Method::POST, "/auth/login", &ctx(None)),
            Decision::Allow
        );
        assert_eq!(
            m.decide(&Method::POST, "/auth/register", &ctx(None)),
            Decision::Allow
        );
    }

    #[test]
    fn catalogue_reads_are_public() {
        let m = matrix();
        for path in [
            "/videojuegos",
            "/videojuegos/42",
            "/generos/7",
            "/desarrolladores",
            "/valoraciones/videojuego/42",
        ] {
            assert_eq!(
                m.decide(&Method::GET, path, &ctx(None)),
                Decision::Allow,
                "expected {path} to be public"
            );
        }
    }

    #[test]
    fn rating_submission_needs_any_authenticated_user() {
        let m = matrix();

        assert_eq!(
            m.decide(&Method::POST, "/valoraciones", &ctx(None)),
            Decision::Unauthenticated
        );
        assert_eq!(
            m.decide(&Method::POST, "/valoraciones", &ctx(Some(Role::User))),
            Decision::Allow
        );
        assert_eq!(
            m.decide(&Method::POST, "/valoraciones", &ctx(Some(Role::Admin))),
            Decision::Allow
        );
    }

    #[test]
    fn catalogue_writes_are_admin_only() {
        let m = matrix();

        assert_eq!(
            m.decide(&Method::POST, "/videojuegos", &ctx(None)),
            Decision::Unauthenticated
        );
        assert_eq!(
            m.decide(&Method::POST, "/videojuegos", &ctx(Some(Role::User))),
            Decision::Forbidden
        );
        assert_eq!(
            m.decide(&Method::POST, "/videojuegos", &ctx(Some(Role::Admin))),
            Decision::Allow
        );

        assert_eq!(
            m.decide(&Method::PUT, "/generos/7", &ctx(Some(Role::User))),
            Decision::Forbidden
        );
        assert_eq!(
            m.decide(&Method::DELETE, "/desarrolladores/3", &ctx(Some(Role::Admin))),
            Decision::Allow
        );
    }

    #[test]
    fn user_management_is_admin_only_for_every_method() {
        let m = matrix();

        for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
            assert_eq!(
                m.decide(&method, "/usuarios", &ctx(None)),
                Decision::Unauthenticated
            );
            assert_eq!(
                m.decide(&method, "/usuarios/9", &ctx(Some(Role::User))),
                Decision::Forbidden
            );
            assert_eq!(
                m.decide(&method, "/usuarios", &ctx(Some(Role::Admin))),
                Decision::Allow
            );
        }
    }

    #[test]
    fn unmatched_routes_default_to_any_authenticated() {
        let m = matrix();

        assert_eq!(
            m.decide(&Method::GET, "/metrics", &ctx(None)),
            Decision::Unauthenticated
        );
        assert_eq!(
            m.decide(&Method::GET, "/metrics", &ctx(Some(Role::User))),
            Decision::Allow
        );
        // GET /auth/... is not covered by the POST-only public rule.
        assert_eq!(
            m.decide(&Method::GET, "/auth/login", &ctx(None)),
            Decision::Unauthenticated
        );
    }

    #[test]
    fn first_matching_rule_wins() {
        let m = matrix();

        // GET /valoraciones matches the public read rule before the
        // authenticated-write rule can be considered.
        assert_eq!(
            m.decide(&Method::GET, "/valoraciones/videojuego/1", &ctx(None)),
            Decision::Allow
        );
    }
}
