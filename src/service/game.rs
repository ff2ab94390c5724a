//! # Game Service
//!
//! Catalogue CRUD for games plus title search and attribute filtering.
//! Creating or updating a game resolves the referenced genre and developer
//! first; dangling references are rejected before anything is written.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::error::entity::NotFoundError;
use crate::model::Game;
use crate::service::CatalogError;
use crate::store::port::{DeveloperStore, GameStore, GenreStore};

/// Attributes of a game as supplied by the caller.
#[derive(Debug, Clone)]
pub struct GameInput {
    pub title: String,
    pub genre_id: Uuid,
    pub developer_id: Uuid,
    pub platform: String,
    pub release_date: NaiveDate,
    pub pegi_rating: String,
    pub image_url: Option<String>,
}

/// Optional filters for [`GameService::filter`]; names, not ids, to match
/// the public query surface.
#[derive(Debug, Clone, Default)]
pub struct GameFilter {
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub developer: Option<String>,
}

pub struct GameService {
    games: Arc<dyn GameStore>,
    genres: Arc<dyn GenreStore>,
    developers: Arc<dyn DeveloperStore>,
}

impl GameService {
    pub fn new(
        games: Arc<dyn GameStore>,
        genres: Arc<dyn GenreStore>,
        developers: Arc<dyn DeveloperStore>,
    ) -> Self {
        Self {
            games,
            genres,
            developers,
        }
    }

    pub fn list(&self) -> Result<Vec<Game>, CatalogError> {
        Ok(self.games.list()?)
    }

    pub fn get(&self, id: Uuid) -> Result<Game, CatalogError> {
        self.games
            .find_by_id(&id)?
            .ok_or_else(|| NotFoundError::new("game").into())
    }

    /// Case-insensitive substring search over titles.
    pub fn search_by_title(&self, query: &str) -> Result<Vec<Game>, CatalogError> {
        let needle = query.to_lowercase();
        Ok(self
            .games
            .list()?
            .into_iter()
            .filter(|g| g.title.to_lowercase().contains(&needle))
            .collect())
    }

    /// Filters by genre name, platform, and/or developer studio name.
    ///
    /// A filter naming an unknown genre or developer is an error, not an
    /// empty result, so typos are visible to the caller.
    pub fn filter(&self, filter: GameFilter) -> Result<Vec<Game>, CatalogError> {
        let genre_id = match filter.genre.as_deref().filter(|s| !s.is_empty()) {
            Some(name) => Some(
                self.genres
                    .find_by_name(name)?
                    .ok_or_else(|| NotFoundError::new("genre"))?
                    .id,
            ),
            None => None,
        };

        let developer_id = match filter.developer.as_deref().filter(|s| !s.is_empty()) {
            Some(name) => Some(
                self.developers
                    .find_by_studio_name(name)?
                    .ok_or_else(|| NotFoundError::new("developer"))?
                    .id,
            ),
            None => None,
        };

        let platform = filter.platform.filter(|s| !s.is_empty());

        Ok(self
            .games
            .list()?
            .into_iter()
            .filter(|g| genre_id.is_none_or(|id| g.genre_id == id))
            .filter(|g| developer_id.is_none_or(|id| g.developer_id == id))
            .filter(|g| {
                platform
                    .as_deref()
                    .is_none_or(|p| g.platform.eq_ignore_ascii_case(p))
            })
            .collect())
    }

    pub fn create(&self, input: GameInput) -> Result<Game, CatalogError> {
        let input = self.validate(input)?;

        let game = self.games.save(Game {
            id: Uuid::new_v4(),
            title: input.title,
            genre_id: input.genre_id,
            developer_id: input.developer_id,
            platform: input.platform,
            release_date: input.release_date,
            pegi_rating: input.pegi_rating,
            image_url: input.image_url,
        })?;
        info!(game_id = %game.id, title = %game.title, "game created");

        Ok(game)
    }

    pub fn update(&self, id: Uuid, input: GameInput) -> Result<Game, CatalogError> {
        let mut game = self.get(id)?;
        let input = self.validate(input)?;

        game.title = input.title;
        game.genre_id = input.genre_id;
        game.developer_id = input.developer_id;
        game.platform = input.platform;
        game.release_date = input.release_date;
        game.pegi_rating = input.pegi_rating;
        game.image_url = input.image_url;

        Ok(self.games.update(game)?)
    }

    pub fn delete(&self, id: Uuid) -> Result<(), CatalogError> {
        if !self.games.delete(&id)? {
            return Err(NotFoundError::new("game").into());
        }
        info!(game_id = %id, "game deleted");
        Ok(())
    }

    fn validate(&self, mut input: GameInput) -> Result<GameInput, CatalogError> {
        input.title = input.title.trim().to_string();
        input.platform = input.platform.trim().to_string();

        if input.title.is_empty() {
            return Err(CatalogError::Validation("title is required".into()));
        }
        if input.platform.is_empty() {
            return Err(CatalogError::Validation("platform is required".into()));
        }

        if self.genres.find_by_id(&input.genre_id)?.is_none() {
            return Err(NotFoundError::new("genre").into());
        }
        if self.developers.find_by_id(&input.developer_id)?.is_none() {
            return Err(NotFoundError::new("developer").into());
        }

        Ok(input)
    }
}
