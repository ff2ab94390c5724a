//! User administration endpoints (`/usuarios`). Every route here is
//! admin-only by the access matrix.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::model::{Role, User};
use crate::service::user::UserInput;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// `GET /usuarios`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.users.list()?))
}

/// `GET /usuarios/{id}`
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.users.get(id)?))
}

/// `POST /usuarios`
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.users.create(
        UserInput {
            name: payload.name,
            email: payload.email,
            role: payload.role,
        },
        &payload.password,
    )?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// `PUT /usuarios/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = state.users.update(
        id,
        UserInput {
            name: payload.name,
            email: payload.email,
            role: payload.role,
        },
    )?;
    Ok(Json(user))
}

/// `DELETE /usuarios/{id}`
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.users.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
