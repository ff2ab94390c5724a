//! # Application Configuration Loader
//!
//! Unified configuration loader for the backend: token signing, HTTP
//! listener, and CORS settings.
//!
//! Automatically loads `.env` files for non-production environments. A
//! custom `DOTENV_FILE` path is checked first, then `.env.{APP_ENV}`, then
//! `.env`.
//!
//! This configuration is initialized once at startup and shared through the
//! application state.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `PORT` | TCP port to listen on | `8080` |
//! | `AUTH_SECRET` | Token signing secret (random if missing) | random |
//! | `AUTH_TOKEN_TTL_HOURS` | Token lifetime in hours | `24` |
//! | `CORS_ORIGINS` | Allowed origins for CORS | `""` |
//! | `CORS_CREDENTIALS` | Allow cookies/headers in CORS requests | `false` |

use std::env;

use crate::config::{
    auth::AuthConfig,
    env::{read_flag, read_u32},
    web::{CorsConfig, HttpConfig},
};

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Token signing and lifetime settings.
    pub auth: AuthConfig,
    /// HTTP listener configuration.
    pub http: HttpConfig,
    /// Cross-Origin Resource Sharing configuration.
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Loads application configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses all supported environment variables and falls back to
    ///   defaults.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        let port = read_u32("PORT", 8080) as u16;

        let cors_env = env::var("CORS_ORIGINS").unwrap_or_default();
        let cors_credentials = read_flag("CORS_CREDENTIALS", false);

        AppConfig {
            auth: AuthConfig::from_env(),
            http: HttpConfig { port },
            cors: CorsConfig {
                env: cors_env,
                credentials: cors_credentials,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::auth::derive_secret_from_string;

    #[test]
    fn from_env_reads_auth_and_http_settings() {
        temp_env::with_vars(
            vec![
                ("AUTH_SECRET", Some("super-secret-key")),
                ("PORT", Some("9001")),
            ],
            || {
                let cfg = AppConfig::from_env();
                assert_eq!(cfg.auth.secret, derive_secret_from_string("super-secret-key"));
                assert_eq!(cfg.http.port, 9001);
            },
        );
    }

    #[test]
    fn from_env_defaults_when_unset() {
        temp_env::with_vars(
            vec![
                ("PORT", None::<&str>),
                ("CORS_ORIGINS", None::<&str>),
                ("CORS_CREDENTIALS", None::<&str>),
            ],
            || {
                let cfg = AppConfig::from_env();
                assert_eq!(cfg.http.port, 8080);
                assert_eq!(cfg.cors.env, "");
                assert!(!cfg.cors.credentials);
            },
        );
    }

    #[test]
    fn from_env_reads_cors_settings() {
        temp_env::with_vars(
            vec![
                ("CORS_ORIGINS", Some("http://a.com,http://b.com")),
                ("CORS_CREDENTIALS", Some("true")),
            ],
            || {
                let cfg = AppConfig::from_env();
                assert_eq!(cfg.cors.env, "http://a.com,http://b.com");
                assert!(cfg.cors.credentials);
            },
        );
    }
}
