//! Game catalogue endpoints (`/videojuegos`). Reads are public; writes are
//! admin-gated by the access matrix before these handlers run.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::model::Game;
use crate::service::game::{GameFilter, GameInput};
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRequest {
    pub title: String,
    pub genre_id: Uuid,
    pub developer_id: Uuid,
    pub platform: String,
    pub release_date: NaiveDate,
    pub pegi_rating: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<GameRequest> for GameInput {
    fn from(r: GameRequest) -> Self {
        GameInput {
            title: r.title,
            genre_id: r.genre_id,
            developer_id: r.developer_id,
            platform: r.platform,
            release_date: r.release_date,
            pegi_rating: r.pegi_rating,
            image_url: r.image_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub titulo: String,
}

#[derive(Debug, Deserialize)]
pub struct FilterParams {
    pub genero: Option<String>,
    pub plataforma: Option<String>,
    pub desarrollador: Option<String>,
}

/// `GET /videojuegos`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Game>>, ApiError> {
    Ok(Json(state.games.list()?))
}

/// `GET /videojuegos/{id}`
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Game>, ApiError> {
    Ok(Json(state.games.get(id)?))
}

/// `GET /videojuegos/buscar?titulo=`
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Game>>, ApiError> {
    Ok(Json(state.games.search_by_title(&params.titulo)?))
}

/// `GET /videojuegos/filtrar?genero=&plataforma=&desarrollador=`
pub async fn filter(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let games = state.games.filter(GameFilter {
        genre: params.genero,
        platform: params.plataforma,
        developer: params.desarrollador,
    })?;
    Ok(Json(games))
}

/// `POST /videojuegos`
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<GameRequest>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let game = state.games.create(payload.into())?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// `PUT /videojuegos/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<GameRequest>,
) -> Result<Json<Game>, ApiError> {
    Ok(Json(state.games.update(id, payload.into())?))
}

/// `DELETE /videojuegos/{id}`
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.games.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
