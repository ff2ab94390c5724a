//! # Rating Service
//!
//! Rating submission and listing. Submission enforces the
//! one-rating-per-user-per-game invariant in two stages: an advisory
//! existence check for a fast, friendly rejection, and the store's
//! compare-and-insert as the authoritative guard. A submission that loses
//! a race between the two still surfaces as a duplicate, never as a
//! generic persistence error.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::entity::NotFoundError;
use crate::model::{MAX_SCORE, MIN_SCORE, Rating};
use crate::store::port::{GameStore, RatingStore, StoreError, UserStore};

/// Failures of rating submission.
#[derive(Debug, Error)]
pub enum RatingError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error("this game has already been rated by this user")]
    DuplicateRating,
    #[error("score must be between 1 and 10")]
    InvalidScore,
    #[error(transparent)]
    Store(anyhow::Error),
}

impl From<StoreError> for RatingError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Duplicate => RatingError::DuplicateRating,
            StoreError::Other(cause) => RatingError::Store(cause),
        }
    }
}

/// A rating enriched with display names for the read side.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RatingView {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub game_id: Uuid,
    pub game_title: String,
    pub score: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Rating submission and per-game listing.
pub struct RatingService {
    ratings: Arc<dyn RatingStore>,
    users: Arc<dyn UserStore>,
    games: Arc<dyn GameStore>,
}

impl RatingService {
    pub fn new(
        ratings: Arc<dyn RatingStore>,
        users: Arc<dyn UserStore>,
        games: Arc<dyn GameStore>,
    ) -> Self {
        Self {
            ratings,
            users,
            games,
        }
    }

    /// Submits a rating for `(user_id, game_id)`.
    ///
    /// ## Errors
    /// - `NotFound` when the user or the game does not exist
    /// - `DuplicateRating` when the pair is already rated, whether detected
    ///   by the advisory check or by the store's insert constraint
    /// - `InvalidScore` when `score` is outside `[1, 10]`; re-checked here
    ///   even though the boundary validates it, because this is the
    ///   invariant-bearing component
    pub fn submit(
        &self,
        user_id: Uuid,
        game_id: Uuid,
        score: i32,
        comment: Option<String>,
    ) -> Result<Rating, RatingError> {
        if self
            .users
            .find_by_id(&user_id)
            .map_err(RatingError::Store)?
            .is_none()
        {
            return Err(NotFoundError::new("user").into());
        }
        if self
            .games
            .find_by_id(&game_id)
            .map_err(RatingError::Store)?
            .is_none()
        {
            return Err(NotFoundError::new("game").into());
        }

        // Advisory fast path; the insert below remains the authority.
        if self
            .ratings
            .exists_by_user_and_game(&user_id, &game_id)
            .map_err(RatingError::Store)?
        {
            debug!(%user_id, %game_id, "duplicate rating rejected early");
            return Err(RatingError::DuplicateRating);
        }

        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(RatingError::InvalidScore);
        }

        let rating = Rating {
            id: Uuid::new_v4(),
            user_id,
            game_id,
            score,
            comment,
        };

        let saved = self.ratings.save(rating)?;
        info!(%user_id, %game_id, score, "rating submitted");

        Ok(saved)
    }

    /// Lists the ratings of one game, enriched with display names.
    ///
    /// Fails with `NotFound` when the game itself does not exist.
    pub fn list_by_game(&self, game_id: Uuid) -> Result<Vec<RatingView>, RatingError> {
        let Some(game) = self
            .games
            .find_by_id(&game_id)
            .map_err(RatingError::Store)?
        else {
            return Err(NotFoundError::new("game").into());
        };

        let ratings = self
            .ratings
            .list_by_game(&game_id)
            .map_err(RatingError::Store)?;

        let mut views = Vec::with_capacity(ratings.len());
        for rating in ratings {
            let user_name = self
                .users
                .find_by_id(&rating.user_id)
                .map_err(RatingError::Store)?
                .map(|u| u.name);

            views.push(RatingView {
                id: rating.id,
                user_id: rating.user_id,
                user_name,
                game_id,
                game_title: game.title.clone(),
                score: rating.score,
                comment: rating.comment,
            });
        }

        Ok(views)
    }
}
