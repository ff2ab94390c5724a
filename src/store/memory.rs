//! # In-Memory Store Adapters
//!
//! Implementations of the store ports backed by process-local hash maps.
//! They are the default persistence for the binary and the workhorse of the
//! test suite.
//!
//! The rating adapter is the interesting one: its `save` performs the
//! check-then-insert under a single write lock, so the
//! one-rating-per-user-per-game constraint holds under concurrent writers.

use std::collections::{HashMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::{Result, anyhow, bail};
use uuid::Uuid;

use crate::model::{Developer, Game, Genre, Rating, User};
use crate::store::port::{
    DeveloperStore, GameStore, GenreStore, RatingStore, StoreError, UserStore,
};

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>> {
    lock.read().map_err(|_| anyhow!("store lock poisoned"))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>> {
    lock.write().map_err(|_| anyhow!("store lock poisoned"))
}

/// In-memory [`UserStore`].
#[derive(Default)]
pub struct MemoryUserStore {
    inner: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryUserStore {
    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = read(&self.inner)?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    fn find_by_id(&self, id: &Uuid) -> Result<Option<User>> {
        Ok(read(&self.inner)?.get(id).cloned())
    }

    fn exists_by_email(&self, email: &str) -> Result<bool> {
        Ok(read(&self.inner)?.values().any(|u| u.email == email))
    }

    fn save(&self, user: User) -> Result<User> {
        write(&self.inner)?.insert(user.id, user.clone());
        Ok(user)
    }

    fn update(&self, user: User) -> Result<User> {
        let mut users = write(&self.inner)?;
        if !users.contains_key(&user.id) {
            bail!("no user record for id {}", user.id);
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    fn delete(&self, id: &Uuid) -> Result<bool> {
        Ok(write(&self.inner)?.remove(id).is_some())
    }

    fn list(&self) -> Result<Vec<User>> {
        Ok(read(&self.inner)?.values().cloned().collect())
    }
}

/// In-memory [`GameStore`].
#[derive(Default)]
pub struct MemoryGameStore {
    inner: RwLock<HashMap<Uuid, Game>>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryGameStore {
    fn find_by_id(&self, id: &Uuid) -> Result<Option<Game>> {
        Ok(read(&self.inner)?.get(id).cloned())
    }

    fn save(&self, game: Game) -> Result<Game> {
        write(&self.inner)?.insert(game.id, game.clone());
        Ok(game)
    }

    fn update(&self, game: Game) -> Result<Game> {
        let mut games = write(&self.inner)?;
        if !games.contains_key(&game.id) {
            bail!("no game record for id {}", game.id);
        }
        games.insert(game.id, game.clone());
        Ok(game)
    }

    fn delete(&self, id: &Uuid) -> Result<bool> {
        Ok(write(&self.inner)?.remove(id).is_some())
    }

    fn list(&self) -> Result<Vec<Game>> {
        Ok(read(&self.inner)?.values().cloned().collect())
    }
}

/// In-memory [`GenreStore`].
#[derive(Default)]
pub struct MemoryGenreStore {
    inner: RwLock<HashMap<Uuid, Genre>>,
}

impl MemoryGenreStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GenreStore for MemoryGenreStore {
    fn find_by_id(&self, id: &Uuid) -> Result<Option<Genre>> {
        Ok(read(&self.inner)?.get(id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Genre>> {
        let genres = read(&self.inner)?;
        Ok(genres.values().find(|g| g.name == name).cloned())
    }

    fn save(&self, genre: Genre) -> Result<Genre> {
        write(&self.inner)?.insert(genre.id, genre.clone());
        Ok(genre)
    }

    fn update(&self, genre: Genre) -> Result<Genre> {
        let mut genres = write(&self.inner)?;
        if !genres.contains_key(&genre.id) {
            bail!("no genre record for id {}", genre.id);
        }
        genres.insert(genre.id, genre.clone());
        Ok(genre)
    }

    fn delete(&self, id: &Uuid) -> Result<bool> {
        Ok(write(&self.inner)?.remove(id).is_some())
    }

    fn list(&self) -> Result<Vec<Genre>> {
        Ok(read(&self.inner)?.values().cloned().collect())
    }
}

/// In-memory [`DeveloperStore`].
#[derive(Default)]
pub struct MemoryDeveloperStore {
    inner: RwLock<HashMap<Uuid, Developer>>,
}

impl MemoryDeveloperStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeveloperStore for MemoryDeveloperStore {
    fn find_by_id(&self, id: &Uuid) -> Result<Option<Developer>> {
        Ok(read(&self.inner)?.get(id).cloned())
    }

    fn find_by_studio_name(&self, name: &str) -> Result<Option<Developer>> {
        let developers = read(&self.inner)?;
        Ok(developers.values().find(|d| d.studio_name == name).cloned())
    }

    fn save(&self, developer: Developer) -> Result<Developer> {
        write(&self.inner)?.insert(developer.id, developer.clone());
        Ok(developer)
    }

    fn update(&self, developer: Developer) -> Result<Developer> {
        let mut developers = write(&self.inner)?;
        if !developers.contains_key(&developer.id) {
            bail!("no developer record for id {}", developer.id);
        }
        developers.insert(developer.id, developer.clone());
        Ok(developer)
    }

    fn delete(&self, id: &Uuid) -> Result<bool> {
        Ok(write(&self.inner)?.remove(id).is_some())
    }

    fn list(&self) -> Result<Vec<Developer>> {
        Ok(read(&self.inner)?.values().cloned().collect())
    }
}

#[derive(Default)]
struct RatingTable {
    by_id: HashMap<Uuid, Rating>,
    /// Unique index over (user, game); kept in lockstep with `by_id`.
    pairs: HashSet<(Uuid, Uuid)>,
}

/// In-memory [`RatingStore`] with a unique (user, game) index.
#[derive(Default)]
pub struct MemoryRatingStore {
    inner: RwLock<RatingTable>,
}

impl MemoryRatingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RatingStore for MemoryRatingStore {
    fn exists_by_user_and_game(&self, user_id: &Uuid, game_id: &Uuid) -> Result<bool> {
        Ok(read(&self.inner)?.pairs.contains(&(*user_id, *game_id)))
    }

    fn save(&self, rating: Rating) -> std::result::Result<Rating, StoreError> {
        let mut table = write(&self.inner)?;

        // Check and insert under one write guard: two racing writers cannot
        // both observe the pair as free.
        if !table.pairs.insert((rating.user_id, rating.game_id)) {
            return Err(StoreError::Duplicate);
        }
        table.by_id.insert(rating.id, rating.clone());
        Ok(rating)
    }

    fn list_by_game(&self, game_id: &Uuid) -> Result<Vec<Rating>> {
        let table = read(&self.inner)?;
        Ok(table
            .by_id
            .values()
            .filter(|r| r.game_id == *game_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use std::sync::Arc;

    fn sample_user(email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Sample".into(),
            email: email.into(),
            password_hash: "hash".into(),
            role: Role::User,
        }
    }

    fn sample_rating(user_id: Uuid, game_id: Uuid, score: i32) -> Rating {
        Rating {
            id: Uuid::new_v4(),
            user_id,
            game_id,
            score,
            comment: None,
        }
    }

    #[test]
    fn user_store_lookup_by_email_and_id() {
        let store = MemoryUserStore::new();
        let user = store.save(sample_user("ana@example.com")).unwrap();

        assert_eq!(
            store.find_by_email("ana@example.com").unwrap(),
            Some(user.clone())
        );
        assert_eq!(store.find_by_id(&user.id).unwrap(), Some(user));
        assert!(store.exists_by_email("ana@example.com").unwrap());
        assert!(!store.exists_by_email("nadie@example.com").unwrap());
    }

    #[test]
    fn user_store_delete_reports_whether_record_existed() {
        let store = MemoryUserStore::new();
        let user = store.save(sample_user("ana@example.com")).unwrap();

        assert!(store.delete(&user.id).unwrap());
        assert!(!store.delete(&user.id).unwrap());
        assert_eq!(store.find_by_id(&user.id).unwrap(), None);
    }

    #[test]
    fn update_requires_an_existing_record() {
        let store = MemoryUserStore::new();
        let ghost = sample_user("ghost@example.com");

        assert!(store.update(ghost).is_err());
    }

    #[test]
    fn rating_store_rejects_second_rating_for_same_pair() {
        let store = MemoryRatingStore::new();
        let (user, game) = (Uuid::new_v4(), Uuid::new_v4());

        store.save(sample_rating(user, game, 7)).unwrap();

        let second = store.save(sample_rating(user, game, 5));
        assert!(matches!(second, Err(StoreError::Duplicate)));

        // A different user may still rate the same game.
        store.save(sample_rating(Uuid::new_v4(), game, 5)).unwrap();
    }

    #[test]
    fn rating_store_pair_index_backs_exists_check() {
        let store = MemoryRatingStore::new();
        let (user, game) = (Uuid::new_v4(), Uuid::new_v4());

        assert!(!store.exists_by_user_and_game(&user, &game).unwrap());
        store.save(sample_rating(user, game, 9)).unwrap();
        assert!(store.exists_by_user_and_game(&user, &game).unwrap());
    }

    #[test]
    fn rating_store_list_by_game_filters() {
        let store = MemoryRatingStore::new();
        let game = Uuid::new_v4();

        store.save(sample_rating(Uuid::new_v4(), game, 3)).unwrap();
        store.save(sample_rating(Uuid::new_v4(), game, 8)).unwrap();
        store
            .save(sample_rating(Uuid::new_v4(), Uuid::new_v4(), 6))
            .unwrap();

        assert_eq!(store.list_by_game(&game).unwrap().len(), 2);
    }

    #[test]
    fn concurrent_saves_for_same_pair_yield_exactly_one_success() {
        let store = Arc::new(MemoryRatingStore::new());
        let (user, game) = (Uuid::new_v4(), Uuid::new_v4());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.save(sample_rating(user, game, (i % 10) + 1)))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let successes = results.iter().filter(|r| r.is_ok()).count();
        let duplicates = results
            .iter()
            .filter(|r| matches!(r, Err(StoreError::Duplicate)))
            .count();

        assert_eq!(successes, 1);
        assert_eq!(duplicates, 7);
    }
}
