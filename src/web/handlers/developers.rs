//! Developer endpoints (`/desarrolladores`).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::model::Developer;
use crate::service::developer::DeveloperInput;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperRequest {
    pub studio_name: String,
    pub country: String,
    pub founded_year: i32,
}

impl From<DeveloperRequest> for DeveloperInput {
    fn from(r: DeveloperRequest) -> Self {
        DeveloperInput {
            studio_name: r.studio_name,
            country: r.country,
            founded_year: r.founded_year,
        }
    }
}

/// `GET /desarrolladores`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Developer>>, ApiError> {
    Ok(Json(state.developers.list()?))
}

/// `GET /desarrolladores/{id}`
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Developer>, ApiError> {
    Ok(Json(state.developers.get(id)?))
}

/// `POST /desarrolladores`
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<DeveloperRequest>,
) -> Result<(StatusCode, Json<Developer>), ApiError> {
    let developer = state.developers.create(payload.into())?;
    Ok((StatusCode::CREATED, Json(developer)))
}

/// `PUT /desarrolladores/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DeveloperRequest>,
) -> Result<Json<Developer>, ApiError> {
    Ok(Json(state.developers.update(id, payload.into())?))
}

/// `DELETE /desarrolladores/{id}`
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.developers.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
