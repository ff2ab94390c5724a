pub mod app;
pub mod auth;
pub mod env;
pub mod web;

pub use app::AppConfig;
pub use auth::AuthConfig;
pub use web::{CorsConfig, HttpConfig};
