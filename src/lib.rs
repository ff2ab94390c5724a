//! # ludoteca
//!
//! REST backend for a video-game catalogue: games, genres, developers,
//! users, and per-user ratings, with role-gated write access.
//!
//! The interesting parts live in [`auth`]: stateless token issuance and
//! validation ([`auth::token`]), the per-request authorization filter
//! ([`auth::filter`]), and the declarative route/role access matrix
//! ([`auth::policy`]). Persistence sits behind store ports
//! ([`store::port`]) with in-memory adapters as the default backend.
//!
//! ## Example wiring
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ludoteca::config::AppConfig;
//! use ludoteca::time::SystemClock;
//! use ludoteca::web::{AppState, build_router};
//!
//! let cfg = AppConfig::from_env();
//! let (state, _stores) = AppState::in_memory(&cfg.auth, Arc::new(SystemClock::new()));
//! let app = build_router(state, &cfg.cors);
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod store;
pub mod time;
pub mod web;
