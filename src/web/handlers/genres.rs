//! Genre endpoints (`/generos`).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::model::Genre;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenreRequest {
    pub name: String,
}

/// `GET /generos`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Genre>>, ApiError> {
    Ok(Json(state.genres.list()?))
}

/// `GET /generos/{id}`
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Genre>, ApiError> {
    Ok(Json(state.genres.get(id)?))
}

/// `POST /generos`
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<GenreRequest>,
) -> Result<(StatusCode, Json<Genre>), ApiError> {
    let genre = state.genres.create(&payload.name)?;
    Ok((StatusCode::CREATED, Json(genre)))
}

/// `PUT /generos/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<GenreRequest>,
) -> Result<Json<Genre>, ApiError> {
    Ok(Json(state.genres.update(id, &payload.name)?))
}

/// `DELETE /generos/{id}`
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.genres.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
