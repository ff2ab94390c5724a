//! Composition root: configuration, store wiring, router, listener.

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use ludoteca::auth::password::hash_password;
use ludoteca::config::AppConfig;
use ludoteca::model::{Role, User};
use ludoteca::store::port::UserStore;
use ludoteca::time::SystemClock;
use ludoteca::web::{AppState, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cfg = AppConfig::from_env();

    let clock = Arc::new(SystemClock::new());
    let (state, stores) = AppState::in_memory(&cfg.auth, clock);

    seed_admin_from_env(stores.users.as_ref())?;

    let app = build_router(state, &cfg.cors);

    let addr = ("0.0.0.0", cfg.http.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind port {}", cfg.http.port))?;
    info!(port = cfg.http.port, "listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// Creates the bootstrap administrator when `ADMIN_EMAIL` and
/// `ADMIN_PASSWORD` are both set and the account does not exist yet.
/// Without it a fresh in-memory deployment has no admin at all, since
/// registration only mints regular users.
fn seed_admin_from_env(users: &dyn UserStore) -> anyhow::Result<()> {
    let (Ok(email), Ok(password)) = (
        std::env::var("ADMIN_EMAIL"),
        std::env::var("ADMIN_PASSWORD"),
    ) else {
        warn!("ADMIN_EMAIL/ADMIN_PASSWORD not set; no administrator account seeded");
        return Ok(());
    };

    if users.exists_by_email(&email)? {
        return Ok(());
    }

    let admin = users.save(User {
        id: Uuid::new_v4(),
        name: "Administrator".into(),
        email,
        password_hash: hash_password(&password)?,
        role: Role::Admin,
    })?;
    info!(user_id = %admin.id, "administrator account seeded");

    Ok(())
}
