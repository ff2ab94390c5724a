//! # Request Authorization Filter
//!
//! Runs once per inbound request, before any handler: extracts the bearer
//! token, validates it, re-fetches the identity, consults the access
//! matrix, and either rejects the request or injects the resulting
//! [`SecurityContext`] as a request extension.
//!
//! Rejection is uniform by construction. A missing token, a malformed one,
//! a bad signature, an expired token, and a token whose subject no longer
//! exists all produce the same anonymous context, so a caller on a
//! protected route sees one identical 401 in every case. The specific
//! cause is visible only in the debug log.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::auth::policy::{AccessMatrix, Decision};
use crate::auth::principal::SecurityContext;
use crate::auth::token::TokenCodec;
use crate::error::ApiError;
use crate::store::port::UserStore;
use crate::time::Clock;

/// Everything the filter needs, cloned into the middleware layer.
#[derive(Clone)]
pub struct AuthState {
    pub users: Arc<dyn UserStore>,
    pub codec: Arc<TokenCodec>,
    pub clock: Arc<dyn Clock>,
    pub matrix: Arc<AccessMatrix>,
}

/// Extracts the bearer token from the `Authorization` header.
///
/// A missing header, a non-UTF-8 value, or a non-bearer scheme all yield
/// `None`; at the transport level an unusable header is simply an
/// anonymous request, never a hard error.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Builds the [`SecurityContext`] for one request.
///
/// On a valid token the subject is re-fetched from the user store so that
/// deleted accounts lose access immediately; the hot path is exactly one
/// signature verification plus at most one store lookup.
pub fn authenticate(headers: &HeaderMap, state: &AuthState) -> SecurityContext {
    let Some(token) = extract_bearer(headers) else {
        return SecurityContext::anonymous();
    };

    let claims = match state.codec.validate(token, state.clock.now()) {
        Ok(claims) => claims,
        Err(cause) => {
            debug!(%cause, "token rejected");
            return SecurityContext::anonymous();
        }
    };

    let Ok(subject) = claims.sub.parse::<uuid::Uuid>() else {
        debug!("token subject is not a valid id");
        return SecurityContext::anonymous();
    };

    match state.users.find_by_id(&subject) {
        Ok(Some(user)) => SecurityContext::authenticated(user),
        Ok(None) => {
            debug!(%subject, "token subject no longer exists");
            SecurityContext::anonymous()
        }
        Err(cause) => {
            warn!(%cause, "user lookup failed during authentication");
            SecurityContext::anonymous()
        }
    }
}

/// Middleware enforcing the access matrix for every route.
///
/// This is the single place a 401 or 403 is produced for route access;
/// handlers behind it can rely on the injected [`SecurityContext`]
/// satisfying their route's requirement.
pub async fn require_access(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let ctx = authenticate(req.headers(), &state);

    match state.matrix.decide(req.method(), req.uri().path(), &ctx) {
        Decision::Allow => {
            req.extensions_mut().insert(ctx);
            Ok(next.run(req).await)
        }
        Decision::Unauthenticated => {
            debug!(path = req.uri().path(), "request rejected: unauthenticated");
            Err(ApiError::Unauthenticated)
        }
        Decision::Forbidden => {
            debug!(path = req.uri().path(), "request rejected: forbidden");
            Err(ApiError::Forbidden)
        }
    }
}
