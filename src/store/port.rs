//! # Store Ports
//!
//! Abstract persistence interfaces consumed by the services. The
//! application never talks to a concrete backend directly; it only sees
//! these traits, so adapters can be swapped without touching domain logic
//! (the in-memory adapter in [`memory`](crate::store::memory) is the
//! default).
//!
//! Lookup failures are `Ok(None)` / `Ok(false)`; `Err` is reserved for
//! infrastructure faults. The one semantic error a port can raise is
//! [`StoreError::Duplicate`], the constraint-violation signal of
//! [`RatingStore::save`].

use anyhow::Result;
use thiserror::Error;
use uuid::Uuid;

use crate::model::{Developer, Game, Genre, Rating, User};

/// Error raised by write operations that enforce a uniqueness constraint.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with the same key combination already exists. Raised
    /// atomically with respect to concurrent writers.
    #[error("a record with this key already exists")]
    Duplicate,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Identity persistence contract.
#[cfg_attr(test, mockall::automock)]
pub trait UserStore: Send + Sync {
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    fn find_by_id(&self, id: &Uuid) -> Result<Option<User>>;

    fn exists_by_email(&self, email: &str) -> Result<bool>;

    fn save(&self, user: User) -> Result<User>;

    fn update(&self, user: User) -> Result<User>;

    /// Returns `true` if a record was removed.
    fn delete(&self, id: &Uuid) -> Result<bool>;

    fn list(&self) -> Result<Vec<User>>;
}

/// Game catalogue persistence contract.
#[cfg_attr(test, mockall::automock)]
pub trait GameStore: Send + Sync {
    fn find_by_id(&self, id: &Uuid) -> Result<Option<Game>>;

    fn save(&self, game: Game) -> Result<Game>;

    fn update(&self, game: Game) -> Result<Game>;

    fn delete(&self, id: &Uuid) -> Result<bool>;

    fn list(&self) -> Result<Vec<Game>>;
}

/// Genre persistence contract.
#[cfg_attr(test, mockall::automock)]
pub trait GenreStore: Send + Sync {
    fn find_by_id(&self, id: &Uuid) -> Result<Option<Genre>>;

    fn find_by_name(&self, name: &str) -> Result<Option<Genre>>;

    fn save(&self, genre: Genre) -> Result<Genre>;

    fn update(&self, genre: Genre) -> Result<Genre>;

    fn delete(&self, id: &Uuid) -> Result<bool>;

    fn list(&self) -> Result<Vec<Genre>>;
}

/// Developer persistence contract.
#[cfg_attr(test, mockall::automock)]
pub trait DeveloperStore: Send + Sync {
    fn find_by_id(&self, id: &Uuid) -> Result<Option<Developer>>;

    fn find_by_studio_name(&self, name: &str) -> Result<Option<Developer>>;

    fn save(&self, developer: Developer) -> Result<Developer>;

    fn update(&self, developer: Developer) -> Result<Developer>;

    fn delete(&self, id: &Uuid) -> Result<bool>;

    fn list(&self) -> Result<Vec<Developer>>;
}

/// Rating persistence contract.
///
/// `save` is the authoritative uniqueness check: it must reject a second
/// rating for the same (user, game) pair with [`StoreError::Duplicate`],
/// even when two writers race past [`exists_by_user_and_game`]
/// simultaneously.
#[cfg_attr(test, mockall::automock)]
pub trait RatingStore: Send + Sync {
    fn exists_by_user_and_game(&self, user_id: &Uuid, game_id: &Uuid) -> Result<bool>;

    fn save(&self, rating: Rating) -> std::result::Result<Rating, StoreError>;

    fn list_by_game(&self, game_id: &Uuid) -> Result<Vec<Rating>>;
}
