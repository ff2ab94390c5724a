//! # API Error Mapping
//!
//! A single error type for the HTTP boundary. Every service error converts
//! into [`ApiError`], and the status mapping lives here and nowhere else:
//!
//! | Variant | Status |
//! |---|---|
//! | `Unauthenticated`, `InvalidCredentials` | 401 |
//! | `Forbidden` | 403 |
//! | `NotFound` | 404 |
//! | `Conflict` | 409 |
//! | `BadRequest` | 400 |
//! | `Internal` | 500 |
//!
//! Token validation failures are collapsed into `Unauthenticated` before
//! they reach this type; the response body never reveals whether a token
//! was missing, malformed, expired, or referenced a deleted account.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::auth::service::AuthError;
use crate::error::entity::NotFoundError;
use crate::service::CatalogError;
use crate::service::rating::RatingError;

/// Error type returned by handlers and the access-control middleware.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication required")]
    Unauthenticated,
    #[error("insufficient permissions for this operation")]
    Forbidden,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Internal causes are logged, never reported to the caller.
        let message = match &self {
            ApiError::Internal(cause) => {
                tracing::error!(%cause, "internal error while handling request");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorBody {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status
                .canonical_reason()
                .unwrap_or("unknown")
                .to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<NotFoundError> for ApiError {
    fn from(e: NotFoundError) -> Self {
        ApiError::NotFound(e.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::DuplicateEmail => {
                ApiError::Conflict("an account with this email already exists".into())
            }
            AuthError::Store(cause) => ApiError::Internal(cause),
        }
    }
}

impl From<RatingError> for ApiError {
    fn from(e: RatingError) -> Self {
        match e {
            RatingError::NotFound(inner) => inner.into(),
            RatingError::DuplicateRating => {
                ApiError::Conflict("this game has already been rated by this user".into())
            }
            RatingError::InvalidScore => {
                ApiError::BadRequest("score must be between 1 and 10".into())
            }
            RatingError::Store(cause) => ApiError::Internal(cause),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(inner) => inner.into(),
            CatalogError::Duplicate { entity, value } => {
                ApiError::Conflict(format!("a {entity} named '{value}' already exists"))
            }
            CatalogError::Validation(msg) => ApiError::BadRequest(msg),
            CatalogError::Store(cause) => ApiError::Internal(cause),
        }
    }
}
