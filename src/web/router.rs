//! # Router
//!
//! Wires every route, the access-control middleware, and the CORS layer.
//! The middleware sits inside the CORS layer so that browser preflights
//! are answered before any access decision, while every real request goes
//! through exactly one authentication pass before its handler.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::filter::require_access;
use crate::config::web::CorsConfig;
use crate::web::cors::build_cors;
use crate::web::fallback;
use crate::web::handlers::{auth, developers, games, genres, ratings, users};
use crate::web::state::AppState;

/// Builds the application router over the given state.
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
        .route("/videojuegos", get(games::list).post(games::create))
        .route("/videojuegos/buscar", get(games::search))
        .route("/videojuegos/filtrar", get(games::filter))
        .route(
            "/videojuegos/{id}",
            get(games::get_one).put(games::update).delete(games::remove),
        )
        .route("/generos", get(genres::list).post(genres::create))
        .route(
            "/generos/{id}",
            get(genres::get_one)
                .put(genres::update)
                .delete(genres::remove),
        )
        .route(
            "/desarrolladores",
            get(developers::list).post(developers::create),
        )
        .route(
            "/desarrolladores/{id}",
            get(developers::get_one)
                .put(developers::update)
                .delete(developers::remove),
        )
        .route("/valoraciones", post(ratings::create))
        .route("/valoraciones/videojuego/{id}", get(ratings::list_by_game))
        .route("/usuarios", get(users::list).post(users::create))
        .route(
            "/usuarios/{id}",
            get(users::get_one).put(users::update).delete(users::remove),
        )
        .fallback(fallback::not_found)
        .layer(middleware::from_fn_with_state(
            state.guard.clone(),
            require_access,
        ))
        .layer(build_cors(cors))
        .with_state(state)
}
