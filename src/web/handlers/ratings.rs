//! Rating endpoints (`/valoraciones`). Reading is public; submitting
//! requires an authenticated caller, whose identity is taken from the
//! request's security context rather than from the payload.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::principal::SecurityContext;
use crate::error::ApiError;
use crate::model::{MAX_SCORE, MIN_SCORE, Rating};
use crate::service::rating::RatingView;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRequest {
    pub game_id: Uuid,
    pub score: i32,
    #[serde(default)]
    pub comment: Option<String>,
}

/// `GET /valoraciones/videojuego/{id}`
pub async fn list_by_game(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<Vec<RatingView>>, ApiError> {
    Ok(Json(state.ratings.list_by_game(game_id)?))
}

/// `POST /valoraciones`
///
/// The subject of the rating is always the authenticated caller; a client
/// cannot submit a rating on behalf of someone else.
pub async fn create(
    State(state): State<AppState>,
    Extension(ctx): Extension<SecurityContext>,
    Json(payload): Json<RatingRequest>,
) -> Result<(StatusCode, Json<Rating>), ApiError> {
    // The access matrix only lets authenticated requests through; the check
    // here covers a misconfigured route.
    let user = ctx.user().ok_or(ApiError::Unauthenticated)?;

    if !(MIN_SCORE..=MAX_SCORE).contains(&payload.score) {
        return Err(ApiError::BadRequest(
            "score must be between 1 and 10".into(),
        ));
    }

    let rating = state
        .ratings
        .submit(user.id, payload.game_id, payload.score, payload.comment)?;

    Ok((StatusCode::CREATED, Json(rating)))
}
