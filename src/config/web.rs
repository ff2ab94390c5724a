//! # HTTP and CORS Configuration
//!
//! Basic configuration structures for the HTTP listener and CORS
//! (Cross-Origin Resource Sharing) behavior. These are assembled into
//! [`AppConfig`](crate::config::app::AppConfig) at startup.

/// HTTP listener configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpConfig {
    /// TCP port the server binds to.
    pub port: u16,
}

/// CORS (Cross-Origin Resource Sharing) configuration.
///
/// `env` holds a comma-separated list of allowed origins, typically taken
/// from `CORS_ORIGINS`.
///
/// # Example
/// ```rust
/// use ludoteca::config::web::CorsConfig;
///
/// let cors = CorsConfig {
///     env: "http://localhost:5173".into(),
///     credentials: true,
/// };
/// assert!(cors.credentials);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub env: String,
    pub credentials: bool,
}
