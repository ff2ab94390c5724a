//! # CORS (Cross-Origin Resource Sharing) Utilities
//!
//! Builds a configurable [`CorsLayer`] for the API router.
//!
//! CORS settings are derived from [`CorsConfig`], allowing runtime
//! customization of allowed origins and credential policy. The allowed
//! methods and headers are fixed to what the API actually uses: the full
//! read/write method set plus `Authorization` and `Content-Type`.
//!
//! If no origins are configured, defaults to allowing
//! `http://localhost:5173` for local frontend development.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::web::CorsConfig;

/// Parses a comma-separated list of origins from environment configuration.
///
/// Invalid or empty entries are ignored.
fn parse_origins_from_env(cors_env: &str) -> Vec<HeaderValue> {
    cors_env
        .split(',')
        .filter_map(|s| {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                HeaderValue::from_str(s).ok()
            }
        })
        .collect()
}

/// Builds a [`CorsLayer`] configured from [`CorsConfig`].
///
/// - Allows `GET`, `POST`, `PUT`, `DELETE`, and `OPTIONS`.
/// - Always includes the `Authorization` and `Content-Type` headers, and
///   exposes `Authorization` to the browser.
/// - Defaults to `http://localhost:5173` when no origins are provided.
/// - Enables credentials when `CorsConfig.credentials` is `true`.
pub fn build_cors(cors: &CorsConfig) -> CorsLayer {
    let origins = parse_origins_from_env(&cors.env);

    // "*" cannot be combined with credentials, so an explicit list is used
    // either way.
    let origin_cfg = if origins.is_empty() {
        AllowOrigin::list([HeaderValue::from_static("http://localhost:5173")])
    } else {
        AllowOrigin::list(origins)
    };

    let mut layer = CorsLayer::new()
        .allow_origin(origin_cfg)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .expose_headers([header::AUTHORIZATION]);

    if cors.credentials {
        layer = layer.allow_credentials(true);
    }

    layer
}
