//! # Application State
//!
//! The wired object graph handed to the router: one service per resource
//! plus the authorization filter state. Built once at startup by the
//! composition root.

use std::sync::Arc;

use crate::auth::filter::AuthState;
use crate::auth::policy::AccessMatrix;
use crate::auth::service::AuthService;
use crate::auth::token::TokenCodec;
use crate::config::auth::AuthConfig;
use crate::service::{DeveloperService, GameService, GenreService, RatingService, UserService};
use crate::store::memory::{
    MemoryDeveloperStore, MemoryGameStore, MemoryGenreStore, MemoryRatingStore, MemoryUserStore,
};
use crate::time::Clock;

/// Everything the handlers and the middleware need, cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub games: Arc<GameService>,
    pub genres: Arc<GenreService>,
    pub developers: Arc<DeveloperService>,
    pub users: Arc<UserService>,
    pub ratings: Arc<RatingService>,
    /// State of the request authorization filter.
    pub guard: AuthState,
}

/// Handles to the raw in-memory stores, for seeding and tests.
pub struct Stores {
    pub users: Arc<MemoryUserStore>,
    pub games: Arc<MemoryGameStore>,
    pub genres: Arc<MemoryGenreStore>,
    pub developers: Arc<MemoryDeveloperStore>,
    pub ratings: Arc<MemoryRatingStore>,
}

impl AppState {
    /// Wires the full application over fresh in-memory stores.
    pub fn in_memory(cfg: &AuthConfig, clock: Arc<dyn Clock>) -> (Self, Stores) {
        let stores = Stores {
            users: Arc::new(MemoryUserStore::new()),
            games: Arc::new(MemoryGameStore::new()),
            genres: Arc::new(MemoryGenreStore::new()),
            developers: Arc::new(MemoryDeveloperStore::new()),
            ratings: Arc::new(MemoryRatingStore::new()),
        };

        let codec = Arc::new(TokenCodec::from_config(cfg));

        let guard = AuthState {
            users: stores.users.clone(),
            codec: codec.clone(),
            clock: clock.clone(),
            matrix: Arc::new(AccessMatrix::catalogue_policy()),
        };

        let state = AppState {
            auth: Arc::new(AuthService::new(stores.users.clone(), codec, clock)),
            games: Arc::new(GameService::new(
                stores.games.clone(),
                stores.genres.clone(),
                stores.developers.clone(),
            )),
            genres: Arc::new(GenreService::new(stores.genres.clone())),
            developers: Arc::new(DeveloperService::new(stores.developers.clone())),
            users: Arc::new(UserService::new(stores.users.clone())),
            ratings: Arc::new(RatingService::new(
                stores.ratings.clone(),
                stores.users.clone(),
                stores.games.clone(),
            )),
            guard,
        };

        (state, stores)
    }
}
